//! Storage port — repository traits for persistence.
//!
//! The storage handle is the only collaborator the core consumes. Writes
//! that touch more than one row (the base/subtype registration insert) must
//! execute inside a single transaction owned by the implementation, and any
//! engine failure must arrive back classified as a
//! [`DomainError`](casa_domain::error::DomainError).

use std::future::Future;

use casa_domain::device::{Device, LightDevice};
use casa_domain::error::DomainError;
use casa_domain::id::RoomId;
use casa_domain::room::Room;

/// Persistence for devices and their subtype rows.
pub trait DeviceRepository {
    /// Atomically insert the base device row and the light subtype row.
    ///
    /// Either both rows exist afterwards or neither does; a subtype-insert
    /// failure must not leave the base row behind.
    fn add_light(&self, light: LightDevice)
    -> impl Future<Output = Result<(), DomainError>> + Send;

    /// Rename a device. `Ok(false)` means no row with that id existed;
    /// existence is decided by the affected-row count, not a prior read.
    fn rename(
        &self,
        id: String,
        name: String,
    ) -> impl Future<Output = Result<bool, DomainError>> + Send;

    /// Delete a device by id, with the same affected-row contract as
    /// [`Self::rename`].
    fn delete(&self, id: String) -> impl Future<Output = Result<bool, DomainError>> + Send;

    /// List base devices, optionally filtered by service type. Always a
    /// `Vec`, never an absent collection.
    fn get_all(
        &self,
        service_type: Option<String>,
    ) -> impl Future<Output = Result<Vec<Device>, DomainError>> + Send;

    /// List full light shapes (base fields joined with the subtype row).
    fn get_lights(&self) -> impl Future<Output = Result<Vec<LightDevice>, DomainError>> + Send;
}

/// Persistence for rooms.
pub trait RoomRepository {
    /// Insert a room and return it with its generated id.
    fn add(&self, name: String) -> impl Future<Output = Result<Room, DomainError>> + Send;

    /// Rename a room; affected-row contract as on
    /// [`DeviceRepository::rename`].
    fn rename(
        &self,
        id: RoomId,
        name: String,
    ) -> impl Future<Output = Result<bool, DomainError>> + Send;

    /// Delete a room. Implementations must refuse (as
    /// [`DomainError::IllegalData`]) while any device still references it.
    fn delete(&self, id: RoomId) -> impl Future<Output = Result<bool, DomainError>> + Send;

    /// List all rooms.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, DomainError>> + Send;
}
