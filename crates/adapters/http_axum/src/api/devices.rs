//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use casa_app::ports::{DeviceRepository, RoomRepository};
use casa_domain::device::{Device, DeviceDraft, DevicePatch, LightDevice};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the device list endpoint.
#[derive(Deserialize)]
pub struct ListQuery {
    pub servicetype: Option<String>,
}

/// Request body for renaming a device.
#[derive(Deserialize)]
pub struct RenameDeviceRequest {
    pub name: String,
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Devices(Json<Vec<Device>>),
    Lights(Json<Vec<LightDevice>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Devices(json) => json.into_response(),
            Self::Lights(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => StatusCode::CREATED.into_response(),
        }
    }
}

/// Possible responses from the rename endpoint.
pub enum RenameResponse {
    Ok,
    NotFound,
}

impl IntoResponse for RenameResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
            Self::NotFound => (StatusCode::NOT_FOUND, "device does not exist").into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
    NotFound,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
            Self::NotFound => (StatusCode::NOT_FOUND, "device does not exist").into_response(),
        }
    }
}

/// `GET /api/devices?servicetype=…`
pub async fn list<DR, RR>(
    State(state): State<AppState<DR, RR>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list(query.servicetype).await?;
    Ok(ListResponse::Devices(Json(devices)))
}

/// `GET /api/lights`
pub async fn list_lights<DR, RR>(
    State(state): State<AppState<DR, RR>>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let lights = state.device_service.list_lights().await?;
    Ok(ListResponse::Lights(Json(lights)))
}

/// `POST /api/devices`
pub async fn create<DR, RR>(
    State(state): State<AppState<DR, RR>>,
    Json(draft): Json<DeviceDraft>,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    state.device_service.register(draft).await?;
    Ok(CreateResponse::Created)
}

/// `PUT /api/devices/:id`
pub async fn rename<DR, RR>(
    State(state): State<AppState<DR, RR>>,
    Path(id): Path<String>,
    Json(req): Json<RenameDeviceRequest>,
) -> Result<RenameResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let found = state
        .device_service
        .rename(DevicePatch { id, name: req.name })
        .await?;
    Ok(if found {
        RenameResponse::Ok
    } else {
        RenameResponse::NotFound
    })
}

/// `DELETE /api/devices/:id`
pub async fn delete<DR, RR>(
    State(state): State<AppState<DR, RR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let found = state.device_service.delete(id).await?;
    Ok(if found {
        DeleteResponse::NoContent
    } else {
        DeleteResponse::NotFound
    })
}
