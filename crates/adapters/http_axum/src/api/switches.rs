//! JSON handlers for the switch resource.
//!
//! Mirrors the sensor handlers; the only difference is the bare-scalar PUT
//! variant, which accepts a state token (`true`, `1`, `t`, ...) instead of
//! an integer.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use hivemind_app::ports::{SensorStore, SwitchStore};
use hivemind_domain::switch::Switch;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Switch>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Switch>),
    /// Legacy contract: the 404 still carries the zero-value entity as
    /// its body.
    NotFound(Json<Switch>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NotFound(json) => (StatusCode::NOT_FOUND, json).into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Accepted,
    DecodeFailed,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Accepted => StatusCode::ACCEPTED,
            Self::DecodeFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, [(header::CONTENT_TYPE, "application/json")]).into_response()
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Accepted,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Accepted => (
                StatusCode::ACCEPTED,
                [(header::CONTENT_TYPE, "application/json")],
            )
                .into_response(),
        }
    }
}

/// `GET /api/switch/`
pub async fn list<SS, WS>(
    State(state): State<AppState<SS, WS>>,
) -> Result<ListResponse, ApiError>
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    let switches = state.switch_service.list_switches().await?;
    Ok(ListResponse::Ok(Json(switches)))
}

/// `GET /api/switch/{id}`
pub async fn get<SS, WS>(
    State(state): State<AppState<SS, WS>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    match state.switch_service.get_switch(&id).await? {
        Some(switch) => Ok(GetResponse::Ok(Json(switch))),
        None => Ok(GetResponse::NotFound(Json(Switch::default()))),
    }
}

/// `POST /api/switch/` — upsert a full entity from the JSON body.
pub async fn create<SS, WS>(
    State(state): State<AppState<SS, WS>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    let Ok(switch) = serde_json::from_slice::<Switch>(&body) else {
        return Ok(CreateResponse::DecodeFailed);
    };
    state.switch_service.store_switch(switch).await?;
    Ok(CreateResponse::Accepted)
}

/// `PUT /api/switch/{id}` — upsert keyed by the path id.
pub async fn update<SS, WS>(
    State(state): State<AppState<SS, WS>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    let switch = decode_put_body(&id, &body);
    state.switch_service.store_switch(switch).await?;
    Ok(UpdateResponse::Accepted)
}

/// Decode a PUT body: a full JSON entity, a bare state token, or — on
/// malformed input — the zero-value entity. Decode failures are swallowed
/// here to match the historical behavior; see DESIGN.md.
fn decode_put_body(id: &str, body: &[u8]) -> Switch {
    let mut switch = serde_json::from_slice::<Switch>(body).unwrap_or_else(|_| Switch {
        state: parse_state(body),
        ..Switch::default()
    });
    switch.id = id.to_string();
    switch
}

/// Parse a bare state token the way the legacy API did: `1`, `t`, `T`,
/// `TRUE`, `true` and `True` all switch on; anything else (including
/// garbage) reads as off.
fn parse_state(body: &[u8]) -> bool {
    matches!(
        std::str::from_utf8(body).map(str::trim),
        Ok("1" | "t" | "T" | "TRUE" | "true" | "True")
    )
}
