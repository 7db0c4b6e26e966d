use axum::extract::{Query, State};
use axum::http::Uri;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::app::AppState;
use crate::error::ApiError;
use crate::proxy::department::{DepartmentPayload, DepartmentProxy};
use crate::proxy::ListFilter;

use super::{ids_from_query, parse_body, require_session, EditTarget};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/department", get(list))
        .route("/api/department/create", post(create))
        .route("/api/department/edit", post(edit))
        .route("/api/department/delete", post(delete))
}

async fn list(
    State(app): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<Json<Value>, ApiError> {
    require_session(&app)?;
    let data = DepartmentProxy::new(app.backend.as_ref())
        .list(filter)
        .await?;
    Ok(Json(data))
}

async fn create(
    State(app): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    require_session(&app)?;
    let department: DepartmentPayload = parse_body(payload)?;
    let data = DepartmentProxy::new(app.backend.as_ref())
        .create(&department)
        .await?;
    Ok(Json(data))
}

async fn edit(
    State(app): State<AppState>,
    Query(target): Query<EditTarget>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    require_session(&app)?;
    let department: DepartmentPayload = parse_body(payload)?;
    let data = DepartmentProxy::new(app.backend.as_ref())
        .update(&target.id, &department)
        .await?;
    Ok(Json(data))
}

async fn delete(State(app): State<AppState>, uri: Uri) -> Result<Json<Value>, ApiError> {
    require_session(&app)?;
    let ids = ids_from_query(uri.query())?;
    let data = DepartmentProxy::new(app.backend.as_ref())
        .delete(ids)
        .await?;
    Ok(Json(data))
}
