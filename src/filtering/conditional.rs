use sea_orm::DatabaseBackend;
use serde_json::Value as JsonValue;
use std::borrow::Cow;

use super::definitions::{Definitions, FieldDefinition, FieldType};
use super::escape::{escape, literal};
use super::operator::Operator;
use super::predicate::{ColumnPredicate, Value, Where};
use super::values::json_integer;
use crate::errors::QueryError;

/// Conditional filter input: a JSON string, or already-decoded JSON.
#[derive(Debug, Clone, Copy)]
pub enum ConditionInput<'a> {
    Json(&'a str),
    Decoded(&'a JsonValue),
    List(&'a [JsonValue]),
    Missing,
}

impl<'a> From<&'a str> for ConditionInput<'a> {
    fn from(json: &'a str) -> Self {
        Self::Json(json)
    }
}

impl<'a> From<&'a String> for ConditionInput<'a> {
    fn from(json: &'a String) -> Self {
        Self::Json(json)
    }
}

impl<'a> From<&'a JsonValue> for ConditionInput<'a> {
    fn from(value: &'a JsonValue) -> Self {
        Self::Decoded(value)
    }
}

impl<'a> From<&'a [JsonValue]> for ConditionInput<'a> {
    fn from(list: &'a [JsonValue]) -> Self {
        Self::List(list)
    }
}

impl<'a, T> From<Option<T>> for ConditionInput<'a>
where
    T: Into<ConditionInput<'a>>,
{
    fn from(input: Option<T>) -> Self {
        input.map_or(Self::Missing, Into::into)
    }
}

/// Decode conditional filter input into its list of raw conditions.
///
/// Strings are decoded as JSON, including an already-decoded JSON string
/// value. Missing input is an empty list.
///
/// # Errors
///
/// [`QueryError::InvalidJson`] if a string is not valid JSON, and
/// [`QueryError::NotAnArray`] if the input is not a list.
pub fn parse_conditions(input: ConditionInput<'_>) -> Result<Cow<'_, [JsonValue]>, QueryError> {
    match input {
        ConditionInput::Missing => Ok(Cow::Borrowed(&[])),
        ConditionInput::List(list) => Ok(Cow::Borrowed(list)),
        ConditionInput::Decoded(JsonValue::Array(list)) => Ok(Cow::Borrowed(list)),
        ConditionInput::Json(json) => decode(json),
        ConditionInput::Decoded(JsonValue::String(json)) => decode(json),
        ConditionInput::Decoded(_) => Err(QueryError::NotAnArray),
    }
}

fn decode(json: &str) -> Result<Cow<'static, [JsonValue]>, QueryError> {
    match serde_json::from_str::<JsonValue>(json)? {
        JsonValue::Array(list) => Ok(Cow::Owned(list)),
        _ => Err(QueryError::NotAnArray),
    }
}

/// One usable `{field, op, value}` entry with its definition resolved
struct Cond<'a> {
    field: &'a str,
    op: &'a str,
    value: &'a JsonValue,
    definition: &'a FieldDefinition,
}

impl<'a> Cond<'a> {
    fn resolve(raw: &'a JsonValue, definitions: &'a Definitions) -> Option<Self> {
        let object = raw.as_object()?;
        let field = object.get("field")?.as_str().filter(|f| !f.is_empty())?;
        let op = object.get("op")?.as_str().filter(|o| !o.is_empty())?;
        let value = object.get("value")?;
        let definition = definitions.get(field)?;
        Some(Self {
            field,
            op,
            value,
            definition,
        })
    }

    fn operator(&self) -> Option<Operator> {
        match self.op.parse() {
            Ok(op) => Some(op),
            Err(err) => {
                tracing::debug!(field = self.field, %err, "skipping condition");
                None
            }
        }
    }
}

/// Build a WHERE from a list of `{field, op, value}` conditions.
///
/// Input that cannot be decoded gives an empty WHERE; conditions naming an
/// undeclared field, lacking `field`/`op`/`value`, or carrying an unusable
/// value or operator are skipped one by one.
///
/// String fields with related columns produce one OR group per condition,
/// each ANDed with the rest of the result.
#[must_use]
pub fn gen_cond_where(
    input: ConditionInput<'_>,
    definitions: &Definitions,
    backend: DatabaseBackend,
) -> Where {
    let mut where_ = Where::new();

    let conditions = match parse_conditions(input) {
        Ok(conditions) => conditions,
        Err(err) => {
            tracing::debug!(%err, "ignoring conditional filter");
            return where_;
        }
    };

    for cond in conditions.iter().filter_map(|raw| Cond::resolve(raw, definitions)) {
        match cond.definition.field_type {
            FieldType::Number => apply_number(&mut where_, &cond),
            FieldType::String => apply_string(&mut where_, &cond, backend),
            FieldType::Date => {
                tracing::trace!(field = cond.field, "date conditions are not supported");
            }
        }
    }

    where_
}

fn apply_number(where_: &mut Where, cond: &Cond<'_>) {
    let column = cond.definition.column_for(cond.field);

    if let Some(items) = cond.value.as_array() {
        let ints: Vec<Value> = items.iter().filter_map(json_integer).map(Value::Int).collect();
        if !ints.is_empty() {
            where_.set(column, ColumnPredicate::Compare(Operator::In, Value::List(ints)));
        }
    } else if let Some(int) = json_integer(cond.value) {
        if let Some(op) = cond.operator() {
            where_.set(column, ColumnPredicate::compare(op, int));
        }
    }
}

fn apply_string(where_: &mut Where, cond: &Cond<'_>, backend: DatabaseBackend) {
    let op = match cond.op {
        "eq" => Operator::Eq,
        "like" => Operator::Like,
        _ => return,
    };
    let compare = |s: &str| {
        let value = if op == Operator::Like {
            Value::Literal(literal(s, backend))
        } else {
            Value::Text(escape(s, backend))
        };
        ColumnPredicate::Compare(op, value)
    };
    let related = cond.definition.related();
    let column = cond.definition.column_for(cond.field);

    if let Some(text) = cond.value.as_str() {
        match related {
            Some(columns) => where_.push_group(Where::any(
                columns
                    .iter()
                    .map(|c| Where::column(c.as_str(), compare(text)))
                    .collect(),
            )),
            None => where_.set(column, compare(text)),
        }
        return;
    }

    let Some(items) = cond.value.as_array() else {
        return;
    };
    let texts: Vec<&str> = items.iter().filter_map(JsonValue::as_str).collect();
    if texts.is_empty() {
        return;
    }
    let any_of = || ColumnPredicate::Or(texts.iter().map(|s| compare(s)).collect());

    match related {
        Some(columns) => where_.push_group(Where::any(
            columns
                .iter()
                .map(|c| Where::column(c.as_str(), any_of()))
                .collect(),
        )),
        None => where_.set(column, any_of()),
    }
}
