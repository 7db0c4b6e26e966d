use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use crate::app::AppState;
use crate::error::ApiError;
use crate::proxy::log_entry::{LogEntryFilter, LogEntryProxy};
use crate::proxy::ListFilter;

use super::{parse_body, require_session};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/log/filter", post(search))
}

/// POST /api/log/filter - paginated log search. Pagination rides in the
/// query string, the search criteria in the body.
async fn search(
    State(app): State<AppState>,
    Query(filter): Query<ListFilter>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    require_session(&app)?;
    let criteria: LogEntryFilter = parse_body(payload)?;
    let data = LogEntryProxy::new(app.backend.as_ref())
        .search(filter, &criteria)
        .await?;
    Ok(Json(data))
}
