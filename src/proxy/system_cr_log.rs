use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ClientError, Dispatch, RequestDescriptor};

use super::{collect_ids, ListFilter};

/// Change-request log entry for planned work on a monitored system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangeRequestPayload {
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub impacted_system: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implement_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_systems: Option<Vec<String>>,
}

pub struct ChangeRequestProxy<'a, D: Dispatch + ?Sized> {
    client: &'a D,
}

impl<'a, D: Dispatch + ?Sized> ChangeRequestProxy<'a, D> {
    pub fn new(client: &'a D) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: ListFilter) -> Result<Value, ClientError> {
        let request =
            RequestDescriptor::get("/api/system-cr-log").with_query(filter.into_query("id"));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, entry: &ChangeRequestPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/system-cr-log/create").with_json(entry)?;
        self.client.dispatch(request).await
    }

    pub async fn update(
        &self,
        id: &str,
        entry: &ChangeRequestPayload,
    ) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/system-cr-log/edit")
            .with_param("id", id)
            .with_json(entry)?;
        self.client.dispatch(request).await
    }

    pub async fn delete<I, S>(&self, ids: I) -> Result<Value, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = RequestDescriptor::post("/api/system-cr-log/delete")
            .with_repeated("ids", collect_ids(ids)?);
        self.client.dispatch(request).await
    }
}
