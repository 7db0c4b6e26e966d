pub mod auth;
pub mod config_keys;
pub mod department;
pub mod incident;
pub mod log_entry;
pub mod severity;
pub mod system_cr_log;
pub mod systems;
pub mod users;

use serde::Deserialize;

use crate::client::ClientError;

/// Fallback pagination for every list screen.
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Shared list-screen filter.
///
/// Fields the caller omits fall back to the documented defaults when the
/// query is built: page 1, limit 10, empty keyword, descending sort on the
/// resource's primary identifier. The filter itself is never mutated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(rename = "keyWord")]
    pub keyword: Option<String>,
    pub status: Option<i32>,
    pub sort_key: Option<String>,
    pub sort_dir: Option<SortDir>,
}

impl ListFilter {
    /// Build the backend query pairs. `default_sort_key` is the resource's
    /// primary identifier column. `status` is a per-resource filter and is
    /// only sent when the caller asked for one.
    pub fn into_query(self, default_sort_key: &str) -> Vec<(String, String)> {
        let mut pairs = vec![
            (
                "page".to_string(),
                self.page.unwrap_or(DEFAULT_PAGE).to_string(),
            ),
            (
                "limit".to_string(),
                self.limit.unwrap_or(DEFAULT_LIMIT).to_string(),
            ),
            ("keyWord".to_string(), self.keyword.unwrap_or_default()),
        ];
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.to_string()));
        }
        pairs.push((
            "sort_key".to_string(),
            self.sort_key
                .filter(|key| !key.is_empty())
                .unwrap_or_else(|| default_sort_key.to_string()),
        ));
        pairs.push((
            "sort_dir".to_string(),
            self.sort_dir.unwrap_or_default().as_str().to_string(),
        ));
        pairs
    }
}

pub(crate) fn collect_ids<I, S>(ids: I) -> Result<Vec<String>, ClientError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
    if ids.is_empty() {
        return Err(ClientError::Validation(
            "at least one id is required".to_string(),
        ));
    }
    Ok(ids)
}
