//! # casa-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `casa-app::ports::storage`
//! - Own the two-table transactional insert behind device registration
//! - Classify engine failures into the domain error taxonomy
//! - Manage `SQLite` connection pool lifecycle and embedded migrations
//!
//! ## Dependency rule
//! Depends on `casa-app` (for port traits) and `casa-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

mod classify;
mod device_repo;
mod error;
mod pool;
mod room_repo;

pub use device_repo::SqliteDeviceRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use room_repo::SqliteRoomRepository;
