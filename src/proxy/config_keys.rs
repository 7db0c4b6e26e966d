use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ClientError, Dispatch, RequestDescriptor};

use super::{collect_ids, ListFilter};

/// One warning-configuration key/value pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigKeyPayload {
    pub key_name: String,
    pub value: String,
    pub description: String,
}

pub struct ConfigKeyProxy<'a, D: Dispatch + ?Sized> {
    client: &'a D,
}

impl<'a, D: Dispatch + ?Sized> ConfigKeyProxy<'a, D> {
    pub fn new(client: &'a D) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: ListFilter) -> Result<Value, ClientError> {
        let request = RequestDescriptor::get("/api/config").with_query(filter.into_query("id"));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, key: &ConfigKeyPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/config/create").with_json(key)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, id: &str, key: &ConfigKeyPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/config/edit")
            .with_param("id", id)
            .with_json(key)?;
        self.client.dispatch(request).await
    }

    pub async fn delete<I, S>(&self, ids: I) -> Result<Value, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request =
            RequestDescriptor::post("/api/config/delete").with_repeated("ids", collect_ids(ids)?);
        self.client.dispatch(request).await
    }
}
