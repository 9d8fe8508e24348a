//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use casa_app::ports::{DeviceRepository, RoomRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API under `/api` and includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<DR, RR>(state: AppState<DR, RR>) -> Router
where
    DR: DeviceRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use casa_app::services::device_service::DeviceService;
    use casa_app::services::room_service::RoomService;
    use casa_domain::device::{Device, LightDevice};
    use casa_domain::error::DomainError;
    use casa_domain::id::RoomId;
    use casa_domain::room::Room;

    struct StubDeviceRepo;
    struct StubRoomRepo;

    impl casa_app::ports::DeviceRepository for StubDeviceRepo {
        async fn add_light(&self, _light: LightDevice) -> Result<(), DomainError> {
            Ok(())
        }
        async fn rename(&self, _id: String, _name: String) -> Result<bool, DomainError> {
            Ok(false)
        }
        async fn delete(&self, _id: String) -> Result<bool, DomainError> {
            Ok(false)
        }
        async fn get_all(
            &self,
            _service_type: Option<String>,
        ) -> Result<Vec<Device>, DomainError> {
            Ok(vec![])
        }
        async fn get_lights(&self) -> Result<Vec<LightDevice>, DomainError> {
            Ok(vec![])
        }
    }

    impl casa_app::ports::RoomRepository for StubRoomRepo {
        async fn add(&self, name: String) -> Result<Room, DomainError> {
            Ok(Room {
                id: RoomId::new(1),
                name,
            })
        }
        async fn rename(&self, _id: RoomId, _name: String) -> Result<bool, DomainError> {
            Ok(false)
        }
        async fn delete(&self, _id: RoomId) -> Result<bool, DomainError> {
            Ok(false)
        }
        async fn get_all(&self) -> Result<Vec<Room>, DomainError> {
            Ok(vec![])
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            DeviceService::new(StubDeviceRepo),
            RoomService::new(StubRoomRepo),
        ))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_empty_device_list() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/devices")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn should_return_not_found_when_renaming_unknown_device() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/devices/missing")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"renamed"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_registration_with_problem_detail() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/devices")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id":"a","kind":"light"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let detail: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(detail["error_type"], "NULL_NOT_ALLOWED");
    }
}
