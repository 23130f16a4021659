use serde::{Deserialize, Serialize};

use super::values::RawValue;
use crate::config::PageConfig;

/// Page request parameters as received: any JSON scalar, or absent.
///
/// Query strings deliver strings; JSON bodies may deliver numbers, booleans
/// or anything else. Only the integer reading of each value is used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageRequest {
    pub page: Option<serde_json::Value>,
    #[serde(alias = "page_size")]
    pub page_size: Option<serde_json::Value>,
}

impl PageRequest {
    pub fn new(
        page: impl Into<serde_json::Value>,
        page_size: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            page: Some(page.into()),
            page_size: Some(page_size.into()),
        }
    }

    /// From raw query-string values
    #[must_use]
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page: page.map(Into::into),
            page_size: page_size.map(Into::into),
        }
    }
}

/// A clamped page: `limit` and `offset` ready for the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub page: u64,
    pub page_size: u64,
    pub limit: u64,
    pub offset: u64,
}

fn int_of(value: Option<&serde_json::Value>) -> Option<i64> {
    value.map(RawValue::from_json).and_then(RawValue::to_int)
}

/// Turn raw page parameters into a clamped page.
///
/// A page that is not a positive integer becomes 1. A page size that is not
/// an integer becomes `config.size`, and any page size is clamped into
/// `[config.min_size, config.max_size]`. Never fails.
#[must_use]
pub fn gen_page(request: &PageRequest, config: &PageConfig) -> PageResult {
    let page = int_of(request.page.as_ref())
        .filter(|p| *p > 0)
        .and_then(|p| u64::try_from(p).ok())
        .unwrap_or(1);

    let requested = int_of(request.page_size.as_ref());
    let mut page_size = requested.map_or(i128::from(config.size), i128::from);

    if page_size > i128::from(config.max_size) {
        page_size = i128::from(config.max_size);
    } else if page_size < i128::from(config.min_size) {
        page_size = i128::from(config.min_size);
    }
    // Clamped into a u64 range above
    let page_size = u64::try_from(page_size).unwrap_or(config.min_size);

    if requested.is_some_and(|r| i128::from(r) != i128::from(page_size)) {
        tracing::debug!(?requested, page_size, "page size clamped");
    }

    PageResult {
        page,
        page_size,
        limit: page_size,
        offset: (page - 1).saturating_mul(page_size),
    }
}
