//! HTTP handlers for the REST API and the dashboard pages.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

use super::dashboard;
use super::state::AppState;
use crate::chart::{self, ChartView};
use crate::core::Report;
use crate::data::DataStore;
use crate::errors::{AppError, AppResult};
use crate::models::{ChartKind, User, UserId};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run a data-store closure off the async workers; file parsing is blocking.
async fn with_store<T, F>(state: &AppState, f: F) -> AppResult<T>
where
    F: FnOnce(&DataStore) -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || f(&store))
        .await
        .map_err(|e| AppError::Other(format!("worker task failed: {e}")))?
}

fn parse_user_id(raw: &str) -> AppResult<UserId> {
    raw.parse()
        .map_err(|_| AppError::InvalidUserId(raw.to_string()))
}

// =============================================================================
// Pages
// =============================================================================

/// GET /
pub async fn mainpage() -> Response {
    let target = ChartKind::PresenceWeekday.page();
    (StatusCode::FOUND, [(header::LOCATION, format!("/{target}"))]).into_response()
}

/// GET /{page}
///
/// Dashboard page for one chart kind; anything else is the not-found page.
pub async fn page(Path(page): Path<String>) -> Response {
    match ChartKind::from_page(&page) {
        Some(kind) => Html(dashboard::render_page(kind)).into_response(),
        None => (StatusCode::NOT_FOUND, Html(dashboard::render_not_found(&page))).into_response(),
    }
}

// =============================================================================
// Health
// =============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Users
// =============================================================================

/// GET /api/v1/users
///
/// Users listing for the dropdown.
pub async fn users_view(State(state): State<AppState>) -> HandlerResult<Vec<User>> {
    let users = with_store(&state, |store| {
        let dir = store.users()?;
        Ok(dir.listing().into_iter().cloned().collect::<Vec<_>>())
    })
    .await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{user_id}
///
/// Absolute avatar URL of the user.
pub async fn avatar_view(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<String> {
    let user_id = parse_user_id(&raw_id)?;
    let avatar = with_store(&state, move |store| {
        let dir = store.users()?;
        dir.avatar(user_id)
            .map(str::to_string)
            .ok_or(AppError::UserNotFound(user_id))
    })
    .await?;
    Ok(Json(avatar))
}

// =============================================================================
// Statistics
// =============================================================================

async fn report_for(state: &AppState, kind: ChartKind, raw_id: &str) -> AppResult<Report> {
    let user_id = parse_user_id(raw_id)?;
    with_store(state, move |store| {
        let data = store.presence()?;
        if !data.contains_key(&user_id) {
            tracing::debug!(user_id, %kind, "user has no presence data");
        }
        Ok(Report::build(kind, &data, user_id))
    })
    .await
}

/// GET /api/v1/mean_time_weekday/{user_id}
pub async fn mean_time_weekday(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Report> {
    Ok(Json(report_for(&state, ChartKind::MeanTimeWeekday, &raw_id).await?))
}

/// GET /api/v1/presence_weekday/{user_id}
pub async fn presence_weekday(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Report> {
    Ok(Json(report_for(&state, ChartKind::PresenceWeekday, &raw_id).await?))
}

/// GET /api/v1/presence_start_end/{user_id}
pub async fn presence_start_end(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Report> {
    Ok(Json(report_for(&state, ChartKind::PresenceStartEnd, &raw_id).await?))
}

/// GET /api/v1/monthly_presence/{user_id}
pub async fn monthly_presence(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Report> {
    Ok(Json(report_for(&state, ChartKind::MonthlyPresence, &raw_id).await?))
}

/// GET /api/v1/charts/{kind}/{user_id}
///
/// The statistic already rendered into a chart description.
pub async fn chart_view(
    State(state): State<AppState>,
    Path((raw_kind, raw_id)): Path<(String, String)>,
) -> HandlerResult<ChartView> {
    let kind: ChartKind = raw_kind.parse()?;
    let report = report_for(&state, kind, &raw_id).await?;
    Ok(Json(chart::render_report(&report)?))
}
