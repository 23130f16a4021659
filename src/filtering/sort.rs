use sea_orm::sea_query::{Alias, Expr, Order, SimpleExpr};
use serde::{Deserialize, Serialize};

const DIRECTIONS: [&str; 4] = ["asc", "ASC", "desc", "DESC"];

/// One `field:direction` clause of a sort string.
///
/// The direction keeps the case it was sent in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderClause {
    pub field: String,
    pub direction: String,
}

impl OrderClause {
    pub fn new(field: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: direction.into(),
        }
    }

    /// Sea-ORM direction; anything other than `asc`/`ASC` sorts descending
    #[must_use]
    pub fn order(&self) -> Order {
        if self.direction.eq_ignore_ascii_case("asc") {
            Order::Asc
        } else {
            Order::Desc
        }
    }

    /// Column expression to order by
    #[must_use]
    pub fn column_expr(&self) -> SimpleExpr {
        Expr::col(Alias::new(&self.field)).into()
    }
}

/// Parse a sort string like `name:asc,created_at:DESC`.
///
/// Clauses whose field is not in `allowed` or whose direction is not one of
/// `asc`, `ASC`, `desc`, `DESC` are dropped; the rest keep their input order.
/// An absent or empty sort string gives `default` alone, or nothing.
#[must_use]
pub fn gen_order(
    sort: Option<&str>,
    allowed: &[&str],
    default: Option<&OrderClause>,
) -> Vec<OrderClause> {
    let Some(sort) = sort.filter(|s| !s.is_empty()) else {
        return default.cloned().into_iter().collect();
    };

    sort.split(',')
        .filter_map(|clause| {
            let mut parts = clause.split(':');
            let field = parts.next().unwrap_or_default();
            let direction = parts.next()?;
            if allowed.contains(&field) && DIRECTIONS.contains(&direction) {
                Some(OrderClause::new(field, direction))
            } else {
                tracing::trace!(clause, "dropping sort clause");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_without_default() {
        assert!(gen_order(None, &[], None).is_empty());
        assert!(gen_order(Some(""), &["a"], None).is_empty());
    }

    #[test]
    fn test_default_when_absent() {
        let def = OrderClause::new("field", "DESC");
        let order = gen_order(None, &[], Some(&def));
        assert_eq!(order, vec![def.clone()]);
        // default only applies when nothing was sent
        let order = gen_order(Some("other:asc"), &[], Some(&def));
        assert!(order.is_empty());
    }

    #[test]
    fn test_keeps_input_order() {
        let order = gen_order(Some("field2:desc,field1:asc"), &["field1", "field2"], None);
        assert_eq!(
            order,
            vec![OrderClause::new("field2", "desc"), OrderClause::new("field1", "asc")]
        );
    }

    #[test]
    fn test_drops_unknown_fields_and_directions() {
        let order = gen_order(
            Some("field1:asc,field2:desc,field3:asc"),
            &["field1", "field3"],
            None,
        );
        assert_eq!(
            order,
            vec![OrderClause::new("field1", "asc"), OrderClause::new("field3", "asc")]
        );

        let order = gen_order(
            Some("field1:asc,field2:error,field1:Desc,field1"),
            &["field1", "field2"],
            None,
        );
        assert_eq!(order, vec![OrderClause::new("field1", "asc")]);
    }

    #[test]
    fn test_direction_case_is_preserved() {
        let order = gen_order(Some("a:DESC,a:desc"), &["a"], None);
        assert_eq!(order[0].direction, "DESC");
        assert_eq!(order[1].direction, "desc");
        assert_eq!(order[0].order(), Order::Desc);
        assert_eq!(OrderClause::new("a", "ASC").order(), Order::Asc);
    }
}
