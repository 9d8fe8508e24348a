//! # casa-domain
//!
//! Pure domain model for the casa smart-home backend.
//!
//! ## Responsibilities
//! - Define **Devices** (the base shape every registered IoT device shares)
//! - Define **device subtypes** (currently only lights) and the kind-tag
//!   dispatch between them
//! - Define **Rooms** (the physical groupings devices can be assigned to)
//! - Define the **domain error taxonomy** every layer reports through
//! - Contain all validation logic — completeness and content checks run
//!   before anything touches storage
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod room;
