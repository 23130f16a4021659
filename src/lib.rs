//! # crudquery
//!
//! Turns the query parameters of REST list endpoints into Sea-ORM query
//! parts: clamped pagination, allow-listed sort clauses, and WHERE
//! conditions built from untrusted filter values checked against a table of
//! declared fields.
//!
//! ```rust
//! use crudquery::CrudQuery;
//! use crudquery::filtering::{ColumnPredicate, Definitions, FieldDefinition, Operator};
//! use sea_orm::DatabaseBackend;
//! use std::collections::HashMap;
//!
//! let query = CrudQuery::new(DatabaseBackend::Sqlite);
//! let definitions = Definitions::new()
//!     .field("id", FieldDefinition::number(Operator::Eq))
//!     .field("name", FieldDefinition::string(Operator::Like));
//!
//! let mut params = HashMap::new();
//! params.insert("id".to_string(), "1,x,3".to_string());
//! params.insert("name".to_string(), "jo".to_string());
//!
//! let where_ = query.gen_where(&params, &definitions);
//! assert_eq!(where_.get("id").and_then(ColumnPredicate::alternatives).map(<[_]>::len), Some(2));
//! let condition: sea_orm::Condition = where_.into();
//! # let _ = condition;
//! ```

pub mod config;
pub mod errors;
pub mod filtering;
pub mod list;
pub mod models;
pub mod query;

pub use config::{PageConfig, PageOptions};
pub use errors::QueryError;
pub use filtering::{
    ColumnPredicate, Definitions, FieldDefinition, FieldType, Literal, Operator, OrderClause,
    PageRequest, PageResult, Value, Where,
};
pub use list::ListQuery;
pub use models::ListParams;
pub use query::CrudQuery;
