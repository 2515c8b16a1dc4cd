//! JSON handlers for the sensor resource.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use hivemind_app::ports::{SensorStore, SwitchStore};
use hivemind_domain::sensor::Sensor;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Sensor>>),
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
    Ok(Json<Sensor>),
    /// Legacy contract: the 404 still carries the zero-value entity as
    /// its body.
    NotFound(Json<Sensor>),
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

/// `GET /api/sensor/`
pub async fn list<SS, WS>(
    State(state): State<AppState<SS, WS>>,
) -> Result<ListResponse, ApiError>
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    let sensors = state.sensor_service.list_sensors().await?;
    Ok(ListResponse::Ok(Json(sensors)))
}

/// `GET /api/sensor/{id}`
pub async fn get<SS, WS>(
    State(state): State<AppState<SS, WS>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    match state.sensor_service.get_sensor(&id).await? {
        Some(sensor) => Ok(GetResponse::Ok(Json(sensor))),
        None => Ok(GetResponse::NotFound(Json(Sensor::default()))),
    }
}

/// `POST /api/sensor/` — upsert a full entity from the JSON body.
///
/// The body is read raw rather than through the `Json` extractor: the
/// legacy API never required a `content-type` header and reports decode
/// failures as 500.
pub async fn create<SS, WS>(
    State(state): State<AppState<SS, WS>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    let Ok(sensor) = serde_json::from_slice::<Sensor>(&body) else {
        return Ok(CreateResponse::DecodeFailed);
    };
    state.sensor_service.store_sensor(sensor).await?;
    Ok(CreateResponse::Accepted)
}

/// `PUT /api/sensor/{id}` — upsert keyed by the path id.
pub async fn update<SS, WS>(
    State(state): State<AppState<SS, WS>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    let sensor = decode_put_body(&id, &body);
    state.sensor_service.store_sensor(sensor).await?;
    Ok(UpdateResponse::Accepted)
}

/// Decode a PUT body: a full JSON entity, a bare integer value, or — on
/// malformed input — the zero-value entity. Decode failures are swallowed
/// here to match the historical behavior; see DESIGN.md. The path id always
/// wins over any id in the body.
fn decode_put_body(id: &str, body: &[u8]) -> Sensor {
    let mut sensor = serde_json::from_slice::<Sensor>(body).unwrap_or_else(|_| Sensor {
        value: serde_json::from_slice(body).unwrap_or_default(),
        ..Sensor::default()
    });
    sensor.id = id.to_string();
    sensor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_full_entity_put_body() {
        let body = br#"{"ID": "ignored", "Name": "Test", "Unit": "C", "Value": 12}"#;
        let sensor = decode_put_body("test", body);
        assert_eq!(sensor.id, "test");
        assert_eq!(sensor.name, "Test");
        assert_eq!(sensor.value, 12);
    }

    #[test]
    fn should_decode_bare_integer_put_body() {
        let sensor = decode_put_body("test", b"12");
        assert_eq!(sensor.id, "test");
        assert_eq!(sensor.value, 12);
        assert_eq!(sensor.name, "");
    }

    #[test]
    fn should_fall_back_to_zero_value_on_malformed_put_body() {
        let sensor = decode_put_body("test", b"not json at all");
        assert_eq!(sensor.id, "test");
        assert_eq!(sensor.value, 0);
    }
}
