use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ClientError, Dispatch, RequestDescriptor};

use super::{collect_ids, ListFilter};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DepartmentPayload {
    pub name: String,
    pub dept_code: String,
    #[serde(rename = "desc")]
    pub description: String,
}

/// Organizational units users are assigned to.
pub struct DepartmentProxy<'a, D: Dispatch + ?Sized> {
    client: &'a D,
}

impl<'a, D: Dispatch + ?Sized> DepartmentProxy<'a, D> {
    pub fn new(client: &'a D) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: ListFilter) -> Result<Value, ClientError> {
        let request = RequestDescriptor::get("/api/department").with_query(filter.into_query("id"));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, department: &DepartmentPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/department/create").with_json(department)?;
        self.client.dispatch(request).await
    }

    pub async fn update(
        &self,
        id: &str,
        department: &DepartmentPayload,
    ) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/department/edit")
            .with_param("id", id)
            .with_json(department)?;
        self.client.dispatch(request).await
    }

    pub async fn delete<I, S>(&self, ids: I) -> Result<Value, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = RequestDescriptor::post("/api/department/delete")
            .with_repeated("ids", collect_ids(ids)?);
        self.client.dispatch(request).await
    }
}
