use sea_orm::DatabaseBackend;

use super::definitions::{Definitions, FieldDefinition, FieldType};
use super::escape::literal;
use super::operator::Operator;
use super::predicate::{ColumnPredicate, Value, Where};
use super::values::{FilterSource, RawValue, raw_to_date};

/// Build a WHERE from flat `field=value` filters.
///
/// Every declared field whose raw value validates gets a predicate keyed by
/// its column; fields that are absent or fail validation get nothing. A
/// comma in the value means "any of these".
#[must_use]
pub fn gen_where<F>(filters: &F, definitions: &Definitions, backend: DatabaseBackend) -> Where
where
    F: FilterSource + ?Sized,
{
    let mut where_ = Where::new();

    for (field, definition) in definitions.iter() {
        let Some(raw) = filters.raw(field) else {
            continue;
        };
        let column = definition.column_for(field);

        let predicate = match definition.field_type {
            FieldType::Number => number_predicate(raw, definition.operator),
            FieldType::String => string_predicate(raw, definition, backend),
            FieldType::Date => date_predicate(raw, definition.operator),
        };

        match predicate {
            Some(predicate) => where_.set(column, predicate),
            None => tracing::debug!(field, "filter value rejected"),
        }
    }

    where_
}

fn number_predicate(raw: RawValue<'_>, op: Operator) -> Option<ColumnPredicate> {
    if let Some(text) = raw.as_text().filter(|s| s.contains(',')) {
        let alternatives: Vec<ColumnPredicate> = text
            .split(',')
            .filter_map(|part| RawValue::Text(part).to_int())
            .map(|v| ColumnPredicate::compare(op, v))
            .collect();
        return (!alternatives.is_empty()).then_some(ColumnPredicate::Or(alternatives));
    }

    raw.to_int().map(|v| ColumnPredicate::compare(op, v))
}

fn string_predicate(
    raw: RawValue<'_>,
    definition: &FieldDefinition,
    backend: DatabaseBackend,
) -> Option<ColumnPredicate> {
    let text = raw.as_text()?;
    let op = definition.operator;
    let compare = |value: &str| {
        if op == Operator::Like {
            ColumnPredicate::compare(op, literal(value, backend))
        } else {
            ColumnPredicate::compare(op, value)
        }
    };

    if text.contains(',') {
        Some(ColumnPredicate::Or(text.split(',').map(compare).collect()))
    } else {
        Some(compare(text))
    }
}

fn date_predicate(raw: RawValue<'_>, op: Operator) -> Option<ColumnPredicate> {
    if let Some(text) = raw.as_text().filter(|s| s.contains(',')) {
        let dates: Vec<Value> = text
            .split(',')
            .filter_map(|part| raw_to_date(RawValue::Text(part)))
            .map(Value::Date)
            .collect();
        if matches!(op, Operator::Between | Operator::NotBetween) && dates.len() != 2 {
            tracing::debug!(bounds = dates.len(), "date range needs exactly two dates");
            return None;
        }
        return (!dates.is_empty()).then_some(ColumnPredicate::Compare(op, Value::List(dates)));
    }

    // Parsing only gates the value; the raw value is what gets compared
    raw_to_date(raw)?;
    let value = match raw {
        RawValue::Text(s) => Value::Text(s.to_owned()),
        RawValue::Int(i) => Value::Int(i),
        RawValue::Float(_) | RawValue::Other => return None,
    };
    Some(ColumnPredicate::Compare(op, value))
}
