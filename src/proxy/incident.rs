use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ClientError, Dispatch, RequestDescriptor};

use super::{collect_ids, ListFilter};

/// Incident record as entered from the console. Times are RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IncidentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_code: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub incident_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_procedure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

pub struct IncidentProxy<'a, D: Dispatch + ?Sized> {
    client: &'a D,
}

impl<'a, D: Dispatch + ?Sized> IncidentProxy<'a, D> {
    pub fn new(client: &'a D) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: ListFilter) -> Result<Value, ClientError> {
        let request = RequestDescriptor::get("/api/incident").with_query(filter.into_query("id"));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, incident: &IncidentPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/incident/create").with_json(incident)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, id: &str, incident: &IncidentPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/incident/edit")
            .with_param("id", id)
            .with_json(incident)?;
        self.client.dispatch(request).await
    }

    pub async fn delete<I, S>(&self, ids: I) -> Result<Value, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request =
            RequestDescriptor::post("/api/incident/delete").with_repeated("ids", collect_ids(ids)?);
        self.client.dispatch(request).await
    }
}
