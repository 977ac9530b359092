use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::history::DEFAULT_EXPORT_FILE;
use crate::record::LocationRecord;
use crate::resolve::ResolutionError;

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── Static file handlers ────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/lookup ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LookupQuery {
    pub number: Option<String>,
}

#[derive(Serialize)]
pub struct LookupResponse {
    pub number: String,
    #[serde(flatten)]
    pub record: LocationRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<LookupResponse>, Response> {
    let start = Instant::now();

    let number = params.number.as_deref().unwrap_or("").trim().to_string();
    if number.is_empty() {
        return Err(
            api_error(StatusCode::BAD_REQUEST, "Missing 'number' parameter").into_response(),
        );
    }

    let resolved = {
        let mut resolver = state.resolver.lock().unwrap();
        resolver.resolve(&number)
    };

    let body = finish_lookup(&state, number, resolved)?;

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /api/lookup?number={} -> {} ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        body.0.number,
        body.0.record.country_description,
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(body)
}

/// Map a resolution outcome to a response. History records every
/// number that passed validation — a downstream lookup failure keeps
/// the entry, only `InvalidNumber` is excluded.
fn finish_lookup(
    state: &AppState,
    number: String,
    resolved: Result<LocationRecord, ResolutionError>,
) -> Result<Json<LookupResponse>, Response> {
    let record = match resolved {
        Ok(r) => r,
        Err(ResolutionError::InvalidNumber) => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                format!("{}", ResolutionError::InvalidNumber),
            )
            .into_response());
        }
        Err(err @ ResolutionError::LookupFailed(_)) => {
            state.history.lock().unwrap().add(&number);
            return Err(api_error(StatusCode::BAD_GATEWAY, format!("{}", err)).into_response());
        }
    };

    state.history.lock().unwrap().add(&number);

    let map_url = record.map_url();
    Ok(Json(LookupResponse {
        number,
        record,
        map_url,
    }))
}

// ─── History endpoints ───────────────────────────────────────────

#[derive(Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<String>,
}

pub async fn history_list(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let history = state.history.lock().unwrap();
    Json(HistoryResponse {
        entries: history.entries().to_vec(),
    })
}

pub async fn history_clear(State(state): State<Arc<AppState>>) -> StatusCode {
    state.history.lock().unwrap().clear();
    StatusCode::NO_CONTENT
}

/// CSV download: one number per row, no header.
pub async fn history_export(State(state): State<Arc<AppState>>) -> Response {
    let csv = state.history.lock().unwrap().to_csv();
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DEFAULT_EXPORT_FILE),
            ),
        ],
        csv,
    )
        .into_response()
}
