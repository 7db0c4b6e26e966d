use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ClientError, Dispatch, RequestDescriptor};

use super::{collect_ids, ListFilter};

/// Create/edit payload for a console user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPayload {
    pub username: String,
    pub password: String,
    pub fullname: String,
    pub user_note: String,
    pub department: String,
    pub mobile_phone: String,
    pub email: String,
    pub status: i32,
}

/// User accounts administered from the console.
pub struct UserProxy<'a, D: Dispatch + ?Sized> {
    client: &'a D,
}

impl<'a, D: Dispatch + ?Sized> UserProxy<'a, D> {
    pub fn new(client: &'a D) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: ListFilter) -> Result<Value, ClientError> {
        let request = RequestDescriptor::get("/api/users").with_query(filter.into_query("id"));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, user: &UserPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/users/create").with_json(user)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, id: &str, user: &UserPayload) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/users/edit")
            .with_param("id", id)
            .with_json(user)?;
        self.client.dispatch(request).await
    }

    pub async fn delete<I, S>(&self, ids: I) -> Result<Value, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request =
            RequestDescriptor::post("/api/users/delete").with_repeated("ids", collect_ids(ids)?);
        self.client.dispatch(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::RecordingDispatcher;

    fn payload() -> UserPayload {
        UserPayload {
            username: "nminh".to_string(),
            password: "s3cret".to_string(),
            fullname: "Nguyen Minh".to_string(),
            user_note: "on-call".to_string(),
            department: "NOC".to_string(),
            mobile_phone: "0912345678".to_string(),
            email: "nminh@example.com".to_string(),
            status: 1,
        }
    }

    #[tokio::test]
    async fn list_carries_documented_defaults() {
        let dispatcher = RecordingDispatcher::ok();
        UserProxy::new(&dispatcher)
            .list(ListFilter::default())
            .await
            .expect("dispatch succeeds");

        let requests = dispatcher.take_requests();
        assert_eq!(requests[0].path, "/api/users");
        assert!(requests[0]
            .query
            .contains(&("page".to_string(), "1".to_string())));
        assert!(requests[0]
            .query
            .contains(&("sort_dir".to_string(), "desc".to_string())));
    }

    #[tokio::test]
    async fn update_targets_the_row_by_query_param() {
        let dispatcher = RecordingDispatcher::ok();
        UserProxy::new(&dispatcher)
            .update("42", &payload())
            .await
            .expect("dispatch succeeds");

        let requests = dispatcher.take_requests();
        assert_eq!(requests[0].path, "/api/users/edit");
        assert_eq!(
            requests[0].query,
            vec![("id".to_string(), "42".to_string())]
        );
        assert_eq!(requests[0].body.as_ref().map(|b| &b["userNote"]), Some(&json!("on-call")));
    }

    #[tokio::test]
    async fn delete_serializes_each_id_separately() {
        let dispatcher = RecordingDispatcher::ok();
        UserProxy::new(&dispatcher)
            .delete(["a", "b"])
            .await
            .expect("dispatch succeeds");

        let requests = dispatcher.take_requests();
        assert_eq!(
            requests[0].query,
            vec![
                ("ids".to_string(), "a".to_string()),
                ("ids".to_string(), "b".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn payload_uses_the_console_wire_names() {
        let value = serde_json::to_value(payload()).expect("serializable");
        assert!(value.get("mobilePhone").is_some());
        assert!(value.get("mobile_phone").is_none());
    }
}
