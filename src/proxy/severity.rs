use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ClientError, Dispatch, RequestDescriptor};

use super::{collect_ids, ListFilter};

/// Alerting severity level, including the auto-call escalation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeverityPayload {
    pub severity_level: String,
    pub description: String,
    pub notify_to_level: i32,
    pub auto_call: bool,
    pub tts_template: String,
}

pub struct SeverityProxy<'a, D: Dispatch + ?Sized> {
    client: &'a D,
}

impl<'a, D: Dispatch + ?Sized> SeverityProxy<'a, D> {
    pub fn new(client: &'a D) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: ListFilter) -> Result<Value, ClientError> {
        let request =
            RequestDescriptor::get("/api/severity-config").with_query(filter.into_query("id"));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, severity: &SeverityPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/severity-config/create").with_json(severity)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, id: &str, severity: &SeverityPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/severity-config/edit")
            .with_param("id", id)
            .with_json(severity)?;
        self.client.dispatch(request).await
    }

    pub async fn delete<I, S>(&self, ids: I) -> Result<Value, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = RequestDescriptor::post("/api/severity-config/delete")
            .with_repeated("ids", collect_ids(ids)?);
        self.client.dispatch(request).await
    }
}
