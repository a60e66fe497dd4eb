//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{LineId, Section, StationId};
use crate::service::{NewLine, ServiceError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(create_station).get(list_stations))
        .route("/stations/:id", axum::routing::delete(delete_station))
        .route("/lines", post(create_line).get(list_lines))
        .route(
            "/lines/:id",
            get(show_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(remove_section),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, reporting failures as a bad request.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "rejected JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Register a station.
async fn create_station(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let req: StationRequest = parse_json(&body)?;
    let station = state.subway.create_station(&req.name)?;

    let location = format!("/stations/{}", station.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationResponse::from(&station)),
    )
        .into_response())
}

/// List all stations.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<StationResponse>>, AppError> {
    let stations = state.subway.stations()?;
    Ok(Json(stations.iter().map(StationResponse::from).collect()))
}

async fn delete_station(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.subway.delete_station(StationId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line with its first section.
async fn create_line(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let req: LineRequest = parse_json(&body)?;
    let first_section = Section::from_raw(req.up_station_id, req.down_station_id, req.distance)
        .map_err(ServiceError::from)?;

    let details = state.subway.create_line(NewLine {
        name: req.name,
        color: req.color,
        first_section,
    })?;

    let location = format!("/lines/{}", details.line.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(LineResponse::from(&details)),
    )
        .into_response())
}

/// List all lines with their ordered stations.
async fn list_lines(State(state): State<AppState>) -> Result<Json<Vec<LineResponse>>, AppError> {
    let lines = state.subway.lines()?;
    Ok(Json(lines.iter().map(LineResponse::from).collect()))
}

async fn show_line(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = path?;
    let details = state.subway.line(LineId(id))?;
    Ok(Json(LineResponse::from(&details)))
}

async fn update_line(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    let req: LineUpdateRequest = parse_json(&body)?;
    state.subway.update_line(LineId(id), &req.name, &req.color)?;
    Ok(StatusCode::OK)
}

async fn delete_line(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.subway.delete_line(LineId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a section to a line, extending or dividing it.
async fn add_section(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Bytes,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = path?;
    let req: SectionRequest = parse_json(&body)?;
    let section = Section::from_raw(req.up_station_id, req.down_station_id, req.distance)
        .map_err(ServiceError::from)?;

    let details = state.subway.add_section(LineId(id), section)?;
    Ok(Json(LineResponse::from(&details)))
}

/// Remove a station from a line.
async fn remove_section(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    query: Result<Query<SectionDeleteQuery>, QueryRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    let Query(query) = query?;
    state
        .subway
        .remove_section(LineId(id), StationId(query.station_id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::Section(section) if section.is_client_error() => {
                AppError::BadRequest { message }
            }
            ServiceError::Section(_) | ServiceError::Store(_) => AppError::Internal { message },
            ServiceError::StationNotFound(_) | ServiceError::LineNotFound(_) => {
                AppError::NotFound { message }
            }
            ServiceError::DuplicateStationName(_)
            | ServiceError::DuplicateLineName(_)
            | ServiceError::StationInUse { .. }
            | ServiceError::BlankName(_) => AppError::BadRequest { message },
        }
    }
}

impl AppError {
    /// Wrap an extractor rejection, keeping its client/server split.
    fn from_rejection(status: StatusCode, message: String) -> Self {
        if status.is_server_error() {
            AppError::Internal { message }
        } else {
            AppError::BadRequest { message }
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
