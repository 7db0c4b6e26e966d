use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ClientError, Dispatch, RequestDescriptor};

use super::{collect_ids, ListFilter};

/// Monitored system with its three escalation contacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SystemPayload {
    pub code: String,
    pub name: String,
    pub level1_user: String,
    pub level2_user: String,
    pub level3_user: String,
}

pub struct SystemProxy<'a, D: Dispatch + ?Sized> {
    client: &'a D,
}

impl<'a, D: Dispatch + ?Sized> SystemProxy<'a, D> {
    pub fn new(client: &'a D) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: ListFilter) -> Result<Value, ClientError> {
        let request = RequestDescriptor::get("/api/systems").with_query(filter.into_query("id"));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, system: &SystemPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/systems/create").with_json(system)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, id: &str, system: &SystemPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/systems/edit")
            .with_param("id", id)
            .with_json(system)?;
        self.client.dispatch(request).await
    }

    pub async fn delete<I, S>(&self, ids: I) -> Result<Value, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request =
            RequestDescriptor::post("/api/systems/delete").with_repeated("ids", collect_ids(ids)?);
        self.client.dispatch(request).await
    }
}
