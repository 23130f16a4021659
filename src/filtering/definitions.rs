use serde::Deserialize;
use std::collections::BTreeMap;

use super::operator::Operator;

/// How a filter value is parsed and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    String,
    Date,
}

/// Declares one filterable field of an endpoint.
///
/// ```rust
/// use crudquery::filtering::{FieldDefinition, FieldType, Operator};
///
/// let def: FieldDefinition =
///     serde_json::from_str(r#"{"type": "string", "op": "like", "col": "user_name"}"#).unwrap();
/// assert_eq!(def.field_type, FieldType::String);
/// assert_eq!(def.operator, Operator::Like);
/// assert_eq!(def.column.as_deref(), Some("user_name"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Operator used by flat filters; conditional filters name their own
    #[serde(rename = "op", default = "default_operator")]
    pub operator: Operator,
    /// Target column; defaults to the field name
    #[serde(rename = "col", alias = "column", default)]
    pub column: Option<String>,
    /// Columns searched together by conditional string filters
    #[serde(rename = "cols", alias = "relatedColumns", default)]
    pub related_columns: Option<Vec<String>>,
}

const fn default_operator() -> Operator {
    Operator::Eq
}

impl FieldDefinition {
    #[must_use]
    pub const fn new(field_type: FieldType, operator: Operator) -> Self {
        Self {
            field_type,
            operator,
            column: None,
            related_columns: None,
        }
    }

    #[must_use]
    pub const fn number(operator: Operator) -> Self {
        Self::new(FieldType::Number, operator)
    }

    #[must_use]
    pub const fn string(operator: Operator) -> Self {
        Self::new(FieldType::String, operator)
    }

    #[must_use]
    pub const fn date(operator: Operator) -> Self {
        Self::new(FieldType::Date, operator)
    }

    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    #[must_use]
    pub fn related_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Column the predicate is keyed by
    #[must_use]
    pub fn column_for<'a>(&'a self, field: &'a str) -> &'a str {
        self.column.as_deref().unwrap_or(field)
    }

    /// Related columns, if any were declared
    #[must_use]
    pub fn related(&self) -> Option<&[String]> {
        self.related_columns
            .as_deref()
            .filter(|columns| !columns.is_empty())
    }
}

/// The filterable fields of one endpoint, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, FieldDefinition>")]
pub struct Definitions {
    fields: Vec<(String, FieldDefinition)>,
}

impl Definitions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Redeclaring a name replaces its definition.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, definition: FieldDefinition) -> Self {
        self.insert(name, definition);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, definition: FieldDefinition) {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = definition;
        } else {
            self.fields.push((name, definition));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, def)| def)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDefinition)> {
        self.fields.iter().map(|(n, def)| (n.as_str(), def))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, FieldDefinition)> for Definitions {
    fn from_iter<I: IntoIterator<Item = (S, FieldDefinition)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |defs, (name, def)| defs.field(name, def))
    }
}

impl From<BTreeMap<String, FieldDefinition>> for Definitions {
    fn from(map: BTreeMap<String, FieldDefinition>) -> Self {
        map.into_iter().collect()
    }
}
