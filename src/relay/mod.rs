pub mod auth;
pub mod config_keys;
pub mod department;
pub mod incident;
pub mod log_entry;
pub mod severity;
pub mod system_cr_log;
pub mod systems;
pub mod users;

use axum::Router;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::app::AppState;
use crate::error::ApiError;

/// Assemble the relay routes for every console resource.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth::routes())
        .merge(users::routes())
        .merge(department::routes())
        .merge(systems::routes())
        .merge(severity::routes())
        .merge(incident::routes())
        .merge(config_keys::routes())
        .merge(system_cr_log::routes())
        .merge(log_entry::routes())
}

/// Target row for edit operations, `?id=<id>`.
#[derive(Debug, Deserialize)]
pub struct EditTarget {
    pub id: String,
}

/// Reject the call before any backend work when nobody is signed in. The
/// backend token only ever comes from the gateway's own session store,
/// never from an inbound header.
pub(crate) fn require_session(app: &AppState) -> Result<(), ApiError> {
    if app.sessions.current().is_some() {
        Ok(())
    } else {
        Err(ApiError::unauthorized("sign-in required"))
    }
}

/// Decode an inbound JSON body into the resource's typed payload.
pub(crate) fn parse_body<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("invalid request body: {e}")))
}

/// Collect the repeated `ids` parameter from a raw query string.
pub(crate) fn ids_from_query(query: Option<&str>) -> Result<Vec<String>, ApiError> {
    let ids: Vec<String> = url::form_urlencoded::parse(query.unwrap_or("").as_bytes())
        .filter(|(key, _)| key == "ids")
        .map(|(_, value)| value.into_owned())
        .collect();
    if ids.is_empty() {
        return Err(ApiError::bad_request("ids is required"));
    }
    Ok(ids)
}
