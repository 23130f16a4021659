//! # Filtering, Sorting & Pagination
//!
//! Translates list-endpoint query parameters into Sea-ORM query parts.
//! Nothing here fails on user input: values that do not validate simply
//! produce no predicate, and bad page parameters fall back to defaults.
//!
//! ## Main Components
//!
//! - [`gen_where`]: flat `field=value` filters (comma means "any of")
//! - [`gen_cond_where`]: JSON lists of `{field, op, value}` conditions
//! - [`gen_order`]: `field:direction,...` sort strings against an allow-list
//! - [`gen_page`]: clamped page/pageSize into limit and offset
//! - [`gen_or`]: free-text search across several columns
//! - [`escape`] / [`literal`]: SQL string escaping and prefix patterns
//!
//! ## Query Parameter Examples
//!
//! ```rust,ignore
//! // Flat filters, one value or several
//! GET /users?id=1,2,3&name=jo&created_at=2024-01-01T00:00:00Z
//!
//! // Conditional filters
//! GET /users?filter=[{"field":"name","op":"like","value":"jo"}]
//!
//! // Sorting and pagination
//! GET /users?sort=name:asc,id:DESC&page=2&pageSize=20
//! ```
//!
//! ## Field Definitions
//!
//! Each endpoint declares which fields may be filtered, how their values are
//! typed and which column and operator they map to:
//!
//! ```rust
//! use crudquery::filtering::{Definitions, FieldDefinition, Operator};
//!
//! let definitions = Definitions::new()
//!     .field("id", FieldDefinition::number(Operator::Eq))
//!     .field("name", FieldDefinition::string(Operator::Like).column("user_name"))
//!     .field("created", FieldDefinition::date(Operator::Gte).column("created_at"));
//! # assert_eq!(definitions.len(), 3);
//! ```

pub mod conditional;
pub mod conditions;
pub mod definitions;
pub mod escape;
pub mod operator;
pub mod pagination;
pub mod predicate;
pub mod search;
pub mod sort;
pub mod values;

// Re-export commonly used items
pub use conditional::{ConditionInput, gen_cond_where, parse_conditions};
pub use conditions::gen_where;
pub use definitions::{Definitions, FieldDefinition, FieldType};
pub use escape::{Literal, escape, literal};
pub use operator::Operator;
pub use pagination::{PageRequest, PageResult, gen_page};
pub use predicate::{ColumnPredicate, Value, Where};
pub use search::gen_or;
pub use sort::{OrderClause, gen_order};
pub use values::{FilterSource, RawValue};
