use sea_orm::{ConnectionTrait, DatabaseBackend};
use std::sync::{PoisonError, RwLock};

use crate::config::{PageConfig, PageOptions};
use crate::filtering::{
    ConditionInput, Definitions, FilterSource, Literal, Operator, OrderClause, PageRequest,
    PageResult, Where, conditional, conditions, escape, pagination, search, sort,
};

/// Entry point holding the page defaults and the escaping dialect.
///
/// All operations take `&self`; the page config sits behind a lock so a
/// shared instance can be reconfigured while requests read it. String
/// values are escaped for the backend the instance was built for, which
/// must be the one the rendered SQL runs against.
///
/// ```rust
/// use crudquery::{CrudQuery, PageOptions, PageRequest};
/// use sea_orm::DatabaseBackend;
///
/// let query = CrudQuery::new(DatabaseBackend::Postgres);
/// query.set_config(PageOptions::default().size(20));
///
/// let page = query.gen_page(&PageRequest::from_query(Some("3"), None), PageOptions::default());
/// assert_eq!((page.limit, page.offset), (20, 40));
/// ```
#[derive(Debug)]
pub struct CrudQuery {
    config: RwLock<PageConfig>,
    backend: DatabaseBackend,
}

impl CrudQuery {
    /// Default page config, string values escaped for `backend`
    #[must_use]
    pub fn new(backend: DatabaseBackend) -> Self {
        Self::with_config(backend, PageOptions::default())
    }

    /// Escape for whatever backend `db` talks to
    #[must_use]
    pub fn for_connection<C: ConnectionTrait>(db: &C) -> Self {
        Self::new(db.get_database_backend())
    }

    /// Start from the defaults with `options` merged on top
    #[must_use]
    pub fn with_config(backend: DatabaseBackend, options: PageOptions) -> Self {
        Self {
            config: RwLock::new(PageConfig::default().with(&options)),
            backend,
        }
    }

    #[must_use]
    pub const fn database_backend(&self) -> DatabaseBackend {
        self.backend
    }

    /// Shallow-merge `options` into the current page config
    pub fn set_config(&self, options: PageOptions) {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        config.merge(&options);
        tracing::debug!(config = ?*config, "page config updated");
    }

    /// Snapshot of the current page config
    #[must_use]
    pub fn config(&self) -> PageConfig {
        *self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn escape(&self, raw: &str) -> String {
        escape::escape(raw, self.backend)
    }

    #[must_use]
    pub fn literal(&self, raw: &str) -> Literal {
        escape::literal(raw, self.backend)
    }

    /// See [`sort::gen_order`]
    #[must_use]
    pub fn gen_order(
        &self,
        sort: Option<&str>,
        allowed: &[&str],
        default: Option<&OrderClause>,
    ) -> Vec<OrderClause> {
        sort::gen_order(sort, allowed, default)
    }

    /// Clamp a page request; `options` override the current config for this call only
    #[must_use]
    pub fn gen_page(&self, request: &PageRequest, options: PageOptions) -> PageResult {
        pagination::gen_page(request, &self.config().with(&options))
    }

    /// See [`conditions::gen_where`]
    #[must_use]
    pub fn gen_where<F>(&self, filters: &F, definitions: &Definitions) -> Where
    where
        F: FilterSource + ?Sized,
    {
        conditions::gen_where(filters, definitions, self.backend)
    }

    /// See [`conditional::gen_cond_where`]
    #[must_use]
    pub fn gen_cond_where<'a>(
        &self,
        input: impl Into<ConditionInput<'a>>,
        definitions: &Definitions,
    ) -> Where {
        conditional::gen_cond_where(input.into(), definitions, self.backend)
    }

    /// Free-text `like` search of `keyword` across `columns`
    #[must_use]
    pub fn gen_or(&self, keyword: &str, columns: &[&str]) -> Vec<Where> {
        self.gen_or_with(keyword, columns, Operator::Like)
    }

    /// See [`search::gen_or`]
    #[must_use]
    pub fn gen_or_with(&self, keyword: &str, columns: &[&str], op: Operator) -> Vec<Where> {
        search::gen_or(keyword, columns, op, self.backend)
    }
}
