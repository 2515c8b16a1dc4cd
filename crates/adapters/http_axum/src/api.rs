//! JSON API handler modules and the `/api` sub-router.

#[allow(clippy::missing_errors_doc)]
pub mod sensors;
#[allow(clippy::missing_errors_doc)]
pub mod switches;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{any, get};
use tower_http::cors::{self, CorsLayer};

use hivemind_app::ports::{SensorStore, SwitchStore};

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// Resource paths keep the legacy trailing-slash convention: the collection
/// lives at `/sensor/` and a single entity at `/sensor/{id}`. Methods the
/// legacy server never implemented answer 501, as does any other path under
/// `/api/`. Sensor and switch responses allow cross-origin reads.
pub fn routes<SS, WS>() -> Router<AppState<SS, WS>>
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    let resources = Router::new()
        .route(
            "/sensor/",
            get(sensors::list::<SS, WS>)
                .post(sensors::create::<SS, WS>)
                .fallback(not_implemented),
        )
        .route(
            "/sensor/{id}",
            get(sensors::get::<SS, WS>)
                .put(sensors::update::<SS, WS>)
                .fallback(not_implemented),
        )
        .route(
            "/switch/",
            get(switches::list::<SS, WS>)
                .post(switches::create::<SS, WS>)
                .fallback(not_implemented),
        )
        .route(
            "/switch/{id}",
            get(switches::get::<SS, WS>)
                .put(switches::update::<SS, WS>)
                .fallback(not_implemented),
        )
        .layer(CorsLayer::new().allow_origin(cors::Any));

    Router::new()
        .route("/", any(index))
        .merge(resources)
        .fallback(not_implemented)
}

/// `/api/` exact match — empty 200 with the JSON content type, any method.
async fn index() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")])
}

/// Unknown paths directly under `/api/`, and methods the legacy server
/// never implemented on resource paths.
async fn not_implemented() -> impl IntoResponse {
    (
        StatusCode::NOT_IMPLEMENTED,
        [(header::CONTENT_TYPE, "application/json")],
    )
}
