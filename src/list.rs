use sea_orm::{QueryFilter, QueryOrder, QuerySelect};

use crate::CrudQuery;
use crate::filtering::{Definitions, OrderClause, PageResult, Where};
use crate::models::ListParams;

/// Everything a list endpoint adds to its select: filter, order and page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filter: Where,
    pub order: Vec<OrderClause>,
    pub page: PageResult,
}

impl ListQuery {
    /// Build from list-endpoint query parameters.
    ///
    /// `allowed_sort` is the sort allow-list; the `filter` parameter is read
    /// as conditional filters against `definitions`.
    #[must_use]
    pub fn from_params(
        query: &CrudQuery,
        params: &ListParams,
        definitions: &Definitions,
        allowed_sort: &[&str],
        default_order: Option<&OrderClause>,
    ) -> Self {
        Self {
            filter: query.gen_cond_where(params.conditions(), definitions),
            order: query.gen_order(params.sort.as_deref(), allowed_sort, default_order),
            page: query.gen_page(&params.page_request(), crate::PageOptions::default()),
        }
    }

    /// Add the condition, the ORDER BY clauses in order, LIMIT and OFFSET
    pub fn apply<S>(&self, select: S) -> S
    where
        S: QueryFilter + QueryOrder + QuerySelect,
    {
        let mut select = select.filter(self.filter.to_condition());
        for clause in &self.order {
            select = QueryOrder::order_by(select, clause.column_expr(), clause.order());
        }
        select.limit(self.page.limit).offset(self.page.offset)
    }
}
