use sea_orm::DatabaseBackend;

use super::escape::{escape, literal};
use super::operator::Operator;
use super::predicate::{ColumnPredicate, Value, Where};

/// Build OR alternatives matching `keyword` against each of `columns`.
///
/// With `eq` the keyword is only escaped; any other operator gets the
/// prefix literal `'keyword%'`. Wrap the result with [`Where::any`] to use it
/// as a group.
#[must_use]
pub fn gen_or(
    keyword: &str,
    columns: &[&str],
    op: Operator,
    backend: DatabaseBackend,
) -> Vec<Where> {
    let value = if op == Operator::Eq {
        Value::Text(escape(keyword, backend))
    } else {
        Value::Literal(literal(keyword, backend))
    };

    columns
        .iter()
        .map(|column| Where::column(*column, ColumnPredicate::Compare(op, value.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND: DatabaseBackend = DatabaseBackend::MySql;

    #[test]
    fn test_like_uses_prefix_literal() {
        let or = gen_or("jo'e", &["first_name", "last_name"], Operator::Like, BACKEND);
        assert_eq!(or.len(), 2);
        let expected = ColumnPredicate::compare(Operator::Like, literal("jo'e", BACKEND));
        assert_eq!(or[0].get("first_name"), Some(&expected));
        assert_eq!(or[1].get("last_name"), Some(&expected));
    }

    #[test]
    fn test_eq_only_escapes() {
        let or = gen_or("jo'e", &["name"], Operator::Eq, BACKEND);
        assert_eq!(
            or[0].get("name"),
            Some(&ColumnPredicate::compare(Operator::Eq, "jo\\'e"))
        );
    }

    #[test]
    fn test_no_columns_gives_no_alternatives() {
        assert!(gen_or("x", &[], Operator::Like, BACKEND).is_empty());
    }
}
