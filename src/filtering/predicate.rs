//! Structural WHERE input.
//!
//! The generators build a [`Where`] tree rather than a finished
//! `sea_orm::Condition` so the exact shape stays inspectable: which column
//! got which operator, which values ended up in an OR list, which groups were
//! combined. [`Where::to_condition`] renders it for Sea-ORM.

use chrono::{DateTime, FixedOffset};
use sea_orm::{
    Condition,
    sea_query::{Alias, BinOper, Expr, SimpleExpr},
};
use serde::Serialize;
use std::collections::BTreeMap;

use super::escape::Literal;
use super::operator::Operator;

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
    Date(DateTime<FixedOffset>),
    /// Pre-escaped SQL, inserted verbatim
    Literal(Literal),
    List(Vec<Value>),
}

impl Value {
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    fn to_simple_expr(&self, op: Operator) -> SimpleExpr {
        match self {
            Self::Int(i) => Expr::val(*i).into(),
            Self::Text(s) => Expr::val(pattern_for(op, s)).into(),
            Self::Date(dt) => Expr::val(*dt).into(),
            Self::Literal(lit) => Expr::cust(lit.as_sql().to_owned()),
            Self::List(values) => {
                SimpleExpr::Tuple(values.iter().map(|v| v.to_simple_expr(op)).collect())
            }
        }
    }
}

/// Matches no row
fn never() -> Condition {
    Condition::all().add(Expr::cust("1 = 0"))
}

/// A comparison of `column` against several values.
///
/// `eq`/`ne` become `IN`/`NOT IN`, a range needs exactly two bounds, and the
/// remaining operators match when any single value does.
fn list_condition(column: &str, op: Operator, values: &[Value]) -> Condition {
    let col = || Expr::col(Alias::new(column));
    let tuple = || SimpleExpr::Tuple(values.iter().map(|v| v.to_simple_expr(op)).collect());

    match op {
        Operator::Eq | Operator::In if values.is_empty() => never(),
        Operator::Ne | Operator::NotIn if values.is_empty() => Condition::all(),
        Operator::Eq | Operator::In => Condition::all().add(col().binary(BinOper::In, tuple())),
        Operator::Ne | Operator::NotIn => {
            Condition::all().add(col().binary(BinOper::NotIn, tuple()))
        }
        Operator::Between | Operator::NotBetween => match values {
            [low, high] => {
                let range = SimpleExpr::Binary(
                    Box::new(low.to_simple_expr(op)),
                    BinOper::And,
                    Box::new(high.to_simple_expr(op)),
                );
                Condition::all().add(col().binary(op.bin_oper(), range))
            }
            _ => {
                tracing::debug!(
                    column,
                    bounds = values.len(),
                    "range without two bounds matches nothing"
                );
                never()
            }
        },
        _ => values.iter().fold(Condition::any(), |cond, value| {
            cond.add(col().binary(op.bin_oper(), value.to_simple_expr(op)))
        }),
    }
}

/// Wildcards for the pattern operators that carry them on the value
fn pattern_for(op: Operator, s: &str) -> String {
    match op {
        Operator::StartsWith => format!("{s}%"),
        Operator::EndsWith => format!("%{s}"),
        Operator::Substring => format!("%{s}%"),
        _ => s.to_owned(),
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Date(value)
    }
}

impl From<Literal> for Value {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// What a single column must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnPredicate {
    /// `{op: value}`
    Compare(Operator, Value),
    /// `{or: [..]}`: any of the alternatives
    Or(Vec<ColumnPredicate>),
}

impl ColumnPredicate {
    #[must_use]
    pub fn compare(op: Operator, value: impl Into<Value>) -> Self {
        Self::Compare(op, value.into())
    }

    /// The comparison, when this is a single one
    #[must_use]
    pub const fn as_compare(&self) -> Option<(Operator, &Value)> {
        match self {
            Self::Compare(op, value) => Some((*op, value)),
            Self::Or(_) => None,
        }
    }

    /// The alternatives, when this is an OR list
    #[must_use]
    pub fn alternatives(&self) -> Option<&[ColumnPredicate]> {
        match self {
            Self::Or(items) => Some(items),
            Self::Compare(..) => None,
        }
    }

    fn to_condition(&self, column: &str) -> Condition {
        match self {
            Self::Compare(op, Value::List(values)) => list_condition(column, *op, values),
            Self::Compare(op, value) => Condition::all().add(
                Expr::col(Alias::new(column)).binary(op.bin_oper(), value.to_simple_expr(*op)),
            ),
            Self::Or(items) => items
                .iter()
                .fold(Condition::any(), |cond, item| cond.add(item.to_condition(column))),
        }
    }
}

/// Structured WHERE input: per-column predicates, ANDed together with any
/// nested groups. A group whose `or` list is non-empty matches when any of
/// its entries does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Where {
    columns: BTreeMap<String, ColumnPredicate>,
    or: Vec<Where>,
    and: Vec<Where>,
}

impl Where {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A where with a single column predicate
    #[must_use]
    pub fn column(column: impl Into<String>, predicate: ColumnPredicate) -> Self {
        let mut where_ = Self::new();
        where_.set(column, predicate);
        where_
    }

    /// A group that matches when any of `alternatives` does
    #[must_use]
    pub fn any(alternatives: Vec<Where>) -> Self {
        Self {
            or: alternatives,
            ..Self::default()
        }
    }

    /// Set the predicate for `column`, replacing an earlier one
    pub fn set(&mut self, column: impl Into<String>, predicate: ColumnPredicate) {
        self.columns.insert(column.into(), predicate);
    }

    /// Add a group that must hold alongside everything else
    pub fn push_group(&mut self, group: Where) {
        self.and.push(group);
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&ColumnPredicate> {
        self.columns.get(column)
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnPredicate)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Alternatives of this group (`{or: [..]}`)
    #[must_use]
    pub fn or_group(&self) -> &[Where] {
        &self.or
    }

    /// Groups ANDed with the column predicates (`{and: [..]}`)
    #[must_use]
    pub fn and_groups(&self) -> &[Where] {
        &self.and
    }

    /// Number of top-level entries: columns plus the AND and OR keys when set
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len() + usize::from(!self.or.is_empty()) + usize::from(!self.and.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render as a Sea-ORM condition.
    ///
    /// Column predicates and AND groups are combined with `AND`; the OR
    /// alternatives, when present, form one more `ANY` member.
    #[must_use]
    pub fn to_condition(&self) -> Condition {
        let mut cond = Condition::all();
        for (column, predicate) in &self.columns {
            cond = cond.add(predicate.to_condition(column));
        }
        for group in &self.and {
            cond = cond.add(group.to_condition());
        }
        if !self.or.is_empty() {
            let any = self
                .or
                .iter()
                .fold(Condition::any(), |any, alt| any.add(alt.to_condition()));
            cond = cond.add(any);
        }
        cond
    }
}

impl From<Where> for Condition {
    fn from(where_: Where) -> Self {
        where_.to_condition()
    }
}

impl From<&Where> for Condition {
    fn from(where_: &Where) -> Self {
        where_.to_condition()
    }
}
