//! # casa-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST JSON API** for device and room management
//!   (`/api/devices`, `/api/lights`, `/api/rooms`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map domain errors into `application/problem+json` responses, never
//!   leaking storage-engine detail on internal failures
//!
//! ## Dependency rule
//! Depends on `casa-app` (for port traits and services) and `casa-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
