//! # casa-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository` — persistence for devices and their subtypes
//!   - `RoomRepository` — persistence for rooms
//! - Provide **driving/inbound ports** as use-case services:
//!   - `DeviceService` — the registration pipeline plus rename/delete/list
//!   - `RoomService` — room CRUD
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `casa-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
