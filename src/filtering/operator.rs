use sea_orm::sea_query::BinOper;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::QueryError;

/// Comparison operators understood by the predicate tree.
///
/// Names follow the query-builder convention (`eq`, `notIn`, `iLike`, ...).
/// Condition input names its operator as a string; resolving one goes
/// through [`FromStr`] and unknown names are an error, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    NotIn,
    Like,
    NotLike,
    ILike,
    NotILike,
    Between,
    NotBetween,
    StartsWith,
    EndsWith,
    Substring,
}

impl Operator {
    pub const ALL: [Self; 17] = [
        Self::Eq,
        Self::Ne,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::In,
        Self::NotIn,
        Self::Like,
        Self::NotLike,
        Self::ILike,
        Self::NotILike,
        Self::Between,
        Self::NotBetween,
        Self::StartsWith,
        Self::EndsWith,
        Self::Substring,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::In => "in",
            Self::NotIn => "notIn",
            Self::Like => "like",
            Self::NotLike => "notLike",
            Self::ILike => "iLike",
            Self::NotILike => "notILike",
            Self::Between => "between",
            Self::NotBetween => "notBetween",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::Substring => "substring",
        }
    }

    /// True for operators that take a list on the right-hand side
    #[must_use]
    pub const fn takes_list(self) -> bool {
        matches!(
            self,
            Self::In | Self::NotIn | Self::Between | Self::NotBetween
        )
    }

    /// The sea-query binary operator this comparison renders to.
    ///
    /// The pattern operators (`startsWith`, `endsWith`, `substring`) render as
    /// `LIKE`; their wildcards are added to the value, not the operator.
    pub(crate) fn bin_oper(self) -> BinOper {
        match self {
            Self::Eq => BinOper::Equal,
            Self::Ne => BinOper::NotEqual,
            Self::Gt => BinOper::GreaterThan,
            Self::Gte => BinOper::GreaterThanOrEqual,
            Self::Lt => BinOper::SmallerThan,
            Self::Lte => BinOper::SmallerThanOrEqual,
            Self::In => BinOper::In,
            Self::NotIn => BinOper::NotIn,
            Self::Like | Self::StartsWith | Self::EndsWith | Self::Substring => BinOper::Like,
            Self::NotLike => BinOper::NotLike,
            Self::ILike => BinOper::Custom("ILIKE"),
            Self::NotILike => BinOper::Custom("NOT ILIKE"),
            Self::Between => BinOper::Between,
            Self::NotBetween => BinOper::NotBetween,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| QueryError::unknown_operator(s))
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
