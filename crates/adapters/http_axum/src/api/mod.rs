//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use axum::Router;
use axum::routing::{get, put};

use casa_app::ports::{DeviceRepository, RoomRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<DR, RR>() -> Router<AppState<DR, RR>>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new()
        // Devices
        .route(
            "/devices",
            get(devices::list::<DR, RR>).post(devices::create::<DR, RR>),
        )
        .route(
            "/devices/{id}",
            put(devices::rename::<DR, RR>).delete(devices::delete::<DR, RR>),
        )
        .route("/lights", get(devices::list_lights::<DR, RR>))
        // Rooms
        .route(
            "/rooms",
            get(rooms::list::<DR, RR>).post(rooms::create::<DR, RR>),
        )
        .route(
            "/rooms/{id}",
            put(rooms::edit::<DR, RR>).delete(rooms::delete::<DR, RR>),
        )
}
