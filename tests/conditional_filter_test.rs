use crudquery::filtering::{
    ColumnPredicate, ConditionInput, Definitions, FieldDefinition, Operator, Value, Where,
};
use crudquery::CrudQuery;
use sea_orm::DatabaseBackend;
use serde_json::json;

fn string_defs() -> Definitions {
    Definitions::new()
        .field("field1", FieldDefinition::string(Operator::Eq))
        .field("field2", FieldDefinition::string(Operator::Eq))
}

fn number_defs() -> Definitions {
    Definitions::new()
        .field("field1", FieldDefinition::number(Operator::Eq))
        .field("field2", FieldDefinition::number(Operator::Eq))
}

#[test]
fn test_error_filter() {
    let query = CrudQuery::new(DatabaseBackend::Sqlite);
    let defs = Definitions::new().field("field1", FieldDefinition::string(Operator::Eq));

    let missing = query.gen_cond_where(ConditionInput::Missing, &defs);
    assert!(missing.is_empty());

    let not_json = query.gen_cond_where(r#"[{ field: "field1", "op": eq, value: "x" }]"#, &defs);
    assert!(not_json.is_empty());

    let object = json!({"field": "field1", "op": "eq", "value": "x"});
    let not_a_list = query.gen_cond_where(&object, &defs);
    assert!(not_a_list.is_empty());

    let number = query.gen_cond_where(&json!(5), &defs);
    assert!(number.is_empty());
}

mod number {
    use super::*;

    #[test]
    fn test_error_number() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let input = json!([
            {"field": "field1", "op": "eq", "value": "a"},
            {"field": "field2", "op": "eq", "value": true}
        ])
        .to_string();

        let where_ = query.gen_cond_where(&input, &number_defs());

        assert!(!where_.contains("field1"));
        assert!(!where_.contains("field2"));
    }

    #[test]
    fn test_one_value() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let input = json!([
            {"field": "field1", "op": "eq", "value": 1},
            {"field": "field2", "op": "ne", "value": 2}
        ])
        .to_string();

        let where_ = query.gen_cond_where(&input, &number_defs());

        assert_eq!(where_.get("field1"), Some(&ColumnPredicate::compare(Operator::Eq, 1)));
        assert_eq!(where_.get("field2"), Some(&ColumnPredicate::compare(Operator::Ne, 2)));
    }

    #[test]
    fn test_two_plus_values_become_in() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let input = json!([
            {"field": "field1", "op": "eq", "value": [1, "a"]},
            {"field": "field2", "op": "eq", "value": [2, 3]}
        ]);

        let where_ = query.gen_cond_where(&input, &number_defs());

        assert_eq!(
            where_.get("field1"),
            Some(&ColumnPredicate::compare(Operator::In, vec![1_i64]))
        );
        assert_eq!(
            where_.get("field2"),
            Some(&ColumnPredicate::compare(Operator::In, vec![2_i64, 3]))
        );
    }

    #[test]
    fn test_column_override() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let defs = Definitions::new()
            .field("age", FieldDefinition::number(Operator::Eq).column("user_age"));
        let input = json!([{"field": "age", "op": "gte", "value": 18}]);

        let where_ = query.gen_cond_where(&input, &defs);

        assert_eq!(where_.get("user_age"), Some(&ColumnPredicate::compare(Operator::Gte, 18)));
    }
}

mod string {
    use super::*;

    #[test]
    fn test_one_value() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let input = json!([
            {"field": "field1", "op": "eq", "value": "x1"},
            {"field": "field2", "op": "like", "value": "x2"}
        ])
        .to_string();

        let where_ = query.gen_cond_where(&input, &string_defs());

        assert_eq!(where_.get("field1"), Some(&ColumnPredicate::compare(Operator::Eq, "x1")));
        assert_eq!(
            where_.get("field2"),
            Some(&ColumnPredicate::compare(Operator::Like, query.literal("x2")))
        );
    }

    #[test]
    fn test_two_plus_values_drop_non_strings() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let input = json!([
            {"field": "field1", "op": "eq", "value": ["a", 1]},
            {"field": "field2", "op": "eq", "value": ["a", "b"]}
        ]);

        let where_ = query.gen_cond_where(&input, &string_defs());

        assert_eq!(
            where_.get("field1").and_then(ColumnPredicate::alternatives),
            Some(&[ColumnPredicate::compare(Operator::Eq, "a")][..])
        );
        assert_eq!(
            where_.get("field2").and_then(ColumnPredicate::alternatives),
            Some(
                &[
                    ColumnPredicate::compare(Operator::Eq, "a"),
                    ColumnPredicate::compare(Operator::Eq, "b")
                ][..]
            )
        );
    }

    #[test]
    fn test_related_columns_scalar_is_or_of_columns() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let defs = Definitions::new().field(
            "name",
            FieldDefinition::string(Operator::Eq).related_columns(["first_name", "last_name"]),
        );
        let input = json!([{"field": "name", "op": "like", "value": "jo"}]);

        let where_ = query.gen_cond_where(&input, &defs);

        assert!(!where_.contains("name"));
        let groups = where_.and_groups();
        assert_eq!(groups.len(), 1);
        let expected = ColumnPredicate::compare(Operator::Like, query.literal("jo"));
        let alternatives = groups[0].or_group();
        assert_eq!(alternatives.len(), 2);
        assert_eq!(alternatives[0].get("first_name"), Some(&expected));
        assert_eq!(alternatives[1].get("last_name"), Some(&expected));
    }

    #[test]
    fn test_related_columns_list_is_per_column_or() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let defs = Definitions::new().field(
            "name",
            FieldDefinition::string(Operator::Eq).related_columns(["first_name", "last_name"]),
        );
        let input = json!([{"field": "name", "op": "eq", "value": ["a", 2, "b"]}]);

        let where_ = query.gen_cond_where(&input, &defs);

        let per_column = ColumnPredicate::Or(vec![
            ColumnPredicate::compare(Operator::Eq, "a"),
            ColumnPredicate::compare(Operator::Eq, "b"),
        ]);
        let expected = Where::any(vec![
            Where::column("first_name", per_column.clone()),
            Where::column("last_name", per_column),
        ]);
        assert_eq!(where_.and_groups(), [expected]);
    }

    #[test]
    fn test_related_column_groups_stay_separate() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let defs = Definitions::new()
            .field(
                "name",
                FieldDefinition::string(Operator::Eq).related_columns(["first_name", "last_name"]),
            )
            .field(
                "place",
                FieldDefinition::string(Operator::Eq).related_columns(["city", "country"]),
            );
        let input = json!([
            {"field": "name", "op": "eq", "value": ["a"]},
            {"field": "place", "op": "eq", "value": ["b"]}
        ]);

        let where_ = query.gen_cond_where(&input, &defs);

        let groups = where_.and_groups();
        assert_eq!(groups.len(), 2);
        assert!(groups[0].or_group()[0].contains("first_name"));
        assert!(groups[1].or_group()[0].contains("city"));
    }

    #[test]
    fn test_groups_do_not_leak_between_calls() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let defs = Definitions::new().field(
            "name",
            FieldDefinition::string(Operator::Eq).related_columns(["first_name", "last_name"]),
        );
        let input = json!([{"field": "name", "op": "eq", "value": ["a"]}]);

        let first = query.gen_cond_where(&input, &defs);
        let second = query.gen_cond_where(&input, &defs);

        assert_eq!(first.and_groups().len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_values_are_escaped() {
        let query = CrudQuery::new(DatabaseBackend::Sqlite);
        let input = json!([{"field": "field1", "op": "eq", "value": "it's"}]);

        let where_ = query.gen_cond_where(&input, &string_defs());

        assert_eq!(
            where_.get("field1"),
            Some(&ColumnPredicate::Compare(Operator::Eq, Value::Text(query.escape("it's"))))
        );
    }
}
