use serde::Deserialize;
use utoipa::IntoParams;

use crate::filtering::{ConditionInput, PageRequest};

/// Query parameters of a list endpoint.
///
/// Every value is kept as the raw string it arrived as; the generators do
/// the parsing and fall back to defaults on anything malformed.
///
/// # Pagination
/// `page` (1-based) and `pageSize`, for example `?page=2&pageSize=20`.
///
/// # Sorting
/// `sort` as comma-separated `field:direction` clauses, for example
/// `?sort=name:asc,id:DESC`.
///
/// # Filtering
/// `filter` as a JSON-encoded list of conditions, for example:
/// ```json
/// [{"field": "name", "op": "like", "value": "jo"}, {"field": "id", "op": "eq", "value": [1, 2]}]
/// ```
#[derive(Debug, Clone, Deserialize, IntoParams, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page number
    #[param(example = "1")]
    pub page: Option<String>,
    /// Number of items per page, clamped to the configured bounds
    #[param(example = "50")]
    pub page_size: Option<String>,
    /// Sort clauses in the format "field:direction,..."
    #[param(example = "name:asc,id:DESC")]
    pub sort: Option<String>,
    /// JSON-encoded list of `{field, op, value}` conditions
    #[param(example = r#"[{"field": "name", "op": "like", "value": "jo"}]"#)]
    pub filter: Option<String>,
}

impl ListParams {
    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.page_size.as_deref())
    }

    #[must_use]
    pub fn conditions(&self) -> ConditionInput<'_> {
        self.filter.as_deref().into()
    }
}
