use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 50;
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 500;
pub const DEFAULT_MIN_PAGE_SIZE: u64 = 1;

/// Pagination defaults used by [`CrudQuery::gen_page`](crate::CrudQuery::gen_page).
///
/// Can be loaded from configuration; missing keys take the defaults:
///
/// ```rust
/// use crudquery::PageConfig;
///
/// let config: PageConfig = serde_json::from_str(r#"{"maxSize": 100}"#).unwrap();
/// assert_eq!(config.size, 50);
/// assert_eq!(config.max_size, 100);
/// assert_eq!(config.min_size, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Page size used when the request does not carry a usable one
    pub size: u64,
    /// Largest page size a request may ask for
    #[serde(alias = "max_size")]
    pub max_size: u64,
    /// Smallest page size a request may ask for
    #[serde(alias = "min_size")]
    pub min_size: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            max_size: DEFAULT_MAX_PAGE_SIZE,
            min_size: DEFAULT_MIN_PAGE_SIZE,
        }
    }
}

impl PageConfig {
    /// Shallow-merge `options` into this config. Values are trusted as given.
    pub fn merge(&mut self, options: &PageOptions) {
        if let Some(size) = options.size {
            self.size = size;
        }
        if let Some(max_size) = options.max_size {
            self.max_size = max_size;
        }
        if let Some(min_size) = options.min_size {
            self.min_size = min_size;
        }
    }

    /// Copy of this config with `options` merged on top
    #[must_use]
    pub fn with(mut self, options: &PageOptions) -> Self {
        self.merge(options);
        self
    }
}

/// Partial page configuration.
///
/// Used both as the patch for [`CrudQuery::set_config`](crate::CrudQuery::set_config)
/// and as per-call overrides for [`CrudQuery::gen_page`](crate::CrudQuery::gen_page).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageOptions {
    pub size: Option<u64>,
    #[serde(alias = "max_size")]
    pub max_size: Option<u64>,
    #[serde(alias = "min_size")]
    pub min_size: Option<u64>,
}

impl PageOptions {
    #[must_use]
    pub const fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub const fn max_size(mut self, max_size: u64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    #[must_use]
    pub const fn min_size(mut self, min_size: u64) -> Self {
        self.min_size = Some(min_size);
        self
    }
}

impl From<PageConfig> for PageOptions {
    fn from(config: PageConfig) -> Self {
        Self {
            size: Some(config.size),
            max_size: Some(config.max_size),
            min_size: Some(config.min_size),
        }
    }
}
