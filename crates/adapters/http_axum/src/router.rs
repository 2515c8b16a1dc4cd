//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::any;
use tower_http::trace::TraceLayer;

use hivemind_app::ports::{SensorStore, SwitchStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// `/` answers an empty 200 on exact match, everything unknown under it a
/// 404; the API lives under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<SS, WS>(state: AppState<SS, WS>) -> Router
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", any(root))
        .nest("/api/", crate::api::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `/` exact match — empty 200, any method.
async fn root() -> StatusCode {
    StatusCode::OK
}

/// Any path under `/` that no route claims.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use hivemind_app::services::sensor_service::SensorService;
    use hivemind_app::services::switch_service::SwitchService;
    use hivemind_domain::error::HivemindError;
    use hivemind_domain::sensor::Sensor;
    use hivemind_domain::switch::Switch;

    struct StubStore;

    impl SensorStore for StubStore {
        async fn get_sensor(&self, id: &str) -> Result<Option<Sensor>, HivemindError> {
            Ok((id == "test").then(|| Sensor {
                id: "test".to_string(),
                value: 64,
                ..Sensor::default()
            }))
        }

        async fn all_sensors(&self) -> Result<Vec<Sensor>, HivemindError> {
            Ok(vec![
                Sensor {
                    id: "test".to_string(),
                    value: 64,
                    ..Sensor::default()
                },
                Sensor {
                    id: "second".to_string(),
                    value: 2,
                    ..Sensor::default()
                },
            ])
        }

        async fn put_sensor(&self, sensor: Sensor) -> Result<Sensor, HivemindError> {
            Ok(sensor)
        }
    }

    impl SwitchStore for StubStore {
        async fn get_switch(&self, _id: &str) -> Result<Option<Switch>, HivemindError> {
            Ok(None)
        }

        async fn all_switches(&self) -> Result<Vec<Switch>, HivemindError> {
            Ok(vec![])
        }

        async fn put_switch(&self, switch: Switch) -> Result<Switch, HivemindError> {
            Ok(switch)
        }
    }

    struct FailingStore;

    impl FailingStore {
        fn error() -> HivemindError {
            HivemindError::Storage("database file vanished".into())
        }
    }

    impl SensorStore for FailingStore {
        async fn get_sensor(&self, _id: &str) -> Result<Option<Sensor>, HivemindError> {
            Err(Self::error())
        }

        async fn all_sensors(&self) -> Result<Vec<Sensor>, HivemindError> {
            Err(Self::error())
        }

        async fn put_sensor(&self, _sensor: Sensor) -> Result<Sensor, HivemindError> {
            Err(Self::error())
        }
    }

    impl SwitchStore for FailingStore {
        async fn get_switch(&self, _id: &str) -> Result<Option<Switch>, HivemindError> {
            Err(Self::error())
        }

        async fn all_switches(&self) -> Result<Vec<Switch>, HivemindError> {
            Err(Self::error())
        }

        async fn put_switch(&self, _switch: Switch) -> Result<Switch, HivemindError> {
            Err(Self::error())
        }
    }

    fn app() -> Router {
        build(AppState::new(
            SensorService::new(StubStore),
            SwitchService::new(StubStore),
        ))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_empty_200_on_root() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "");
    }

    #[tokio::test]
    async fn should_return_404_on_unknown_path() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "");
    }

    #[tokio::test]
    async fn should_return_empty_200_with_json_content_type_on_api_root() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_string(response).await, "");
    }

    #[tokio::test]
    async fn should_return_501_on_unknown_api_path() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/bogus")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn should_return_sensor_json_when_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/sensor/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );

        let body = body_string(response).await;
        let sensor: Sensor = serde_json::from_str(&body).unwrap();
        assert_eq!(sensor.id, "test");
        assert_eq!(sensor.value, 64);
    }

    #[tokio::test]
    async fn should_return_404_with_zero_value_body_when_sensor_missing() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/sensor/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Legacy behavior: body is still written after the 404 header.
        let body = body_string(response).await;
        let sensor: Sensor = serde_json::from_str(&body).unwrap();
        assert_eq!(sensor, Sensor::default());
    }

    #[tokio::test]
    async fn should_list_all_sensors_on_collection_path() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/sensor/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let sensors: Vec<Sensor> = serde_json::from_str(&body).unwrap();
        assert_eq!(sensors.len(), 2);
    }

    #[tokio::test]
    async fn should_return_501_on_post_to_sensor_id_path() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sensor/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn should_return_501_on_unsupported_method() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/sensor/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn should_accept_put_with_bare_integer_body() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/sensor/test")
                    .body(Body::from("12"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn should_return_500_with_empty_body_when_store_fails() {
        let app = build(AppState::new(
            SensorService::new(FailingStore),
            SwitchService::new(FailingStore),
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/sensor/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "");
    }

    #[tokio::test]
    async fn should_return_500_when_store_fails_on_upsert() {
        let app = build(AppState::new(
            SensorService::new(FailingStore),
            SwitchService::new(FailingStore),
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/sensor/test")
                    .body(Body::from("12"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn should_return_500_on_malformed_post_body() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sensor/")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
