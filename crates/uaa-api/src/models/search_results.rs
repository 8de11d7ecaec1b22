use serde::{Deserialize, Serialize};

/// Paged response wrapper returned by SCIM list and filter endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    #[serde(default = "Vec::new")]
    pub resources: Vec<T>,
    #[serde(default)]
    pub start_index: u32,
    #[serde(default)]
    pub items_per_page: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        SearchResults {
            resources: Vec::new(),
            start_index: 1,
            items_per_page: 0,
            total_results: 0,
            schemas: Vec::new(),
        }
    }
}

impl<T> SearchResults<T> {
    /// Consumes the page, returning its first resource.
    pub fn into_first(self) -> Option<T> {
        self.resources.into_iter().next()
    }
}
