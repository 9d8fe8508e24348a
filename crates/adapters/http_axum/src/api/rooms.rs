//! JSON REST handlers for rooms.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use casa_app::ports::{DeviceRepository, RoomRepository};
use casa_domain::id::RoomId;
use casa_domain::room::{Room, RoomDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Room>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Room>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the edit endpoint.
pub enum EditResponse {
    Ok,
    NotFound,
}

impl IntoResponse for EditResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
            Self::NotFound => (StatusCode::NOT_FOUND, "room does not exist").into_response(),
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
            Self::NotFound => (StatusCode::NOT_FOUND, "room does not exist").into_response(),
        }
    }
}

/// `GET /api/rooms`
pub async fn list<DR, RR>(
    State(state): State<AppState<DR, RR>>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let rooms = state.room_service.list().await?;
    Ok(ListResponse::Ok(Json(rooms)))
}

/// `POST /api/rooms`
pub async fn create<DR, RR>(
    State(state): State<AppState<DR, RR>>,
    Json(draft): Json<RoomDraft>,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let room = state.room_service.add(draft).await?;
    Ok(CreateResponse::Created(Json(room)))
}

/// `PUT /api/rooms/:id`
pub async fn edit<DR, RR>(
    State(state): State<AppState<DR, RR>>,
    Path(id): Path<i64>,
    Json(draft): Json<RoomDraft>,
) -> Result<EditResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let found = state.room_service.edit(RoomId::new(id), draft).await?;
    Ok(if found {
        EditResponse::Ok
    } else {
        EditResponse::NotFound
    })
}

/// `DELETE /api/rooms/:id`
pub async fn delete<DR, RR>(
    State(state): State<AppState<DR, RR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let found = state.room_service.delete(RoomId::new(id)).await?;
    Ok(if found {
        DeleteResponse::NoContent
    } else {
        DeleteResponse::NotFound
    })
}
