//! Shared application state for axum handlers.

use std::sync::Arc;

use casa_app::ports::{DeviceRepository, RoomRepository};
use casa_app::services::device_service::DeviceService;
use casa_app::services::room_service::RoomService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<DR, RR> {
    /// Device registration and CRUD service.
    pub device_service: Arc<DeviceService<DR>>,
    /// Room CRUD service.
    pub room_service: Arc<RoomService<RR>>,
}

impl<DR, RR> Clone for AppState<DR, RR> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            room_service: Arc::clone(&self.room_service),
        }
    }
}

impl<DR, RR> AppState<DR, RR>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(device_service: DeviceService<DR>, room_service: RoomService<RR>) -> Self {
        Self {
            device_service: Arc::new(device_service),
            room_service: Arc::new(room_service),
        }
    }
}
