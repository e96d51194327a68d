//! # minorm
//!
//! A minimal object-to-relational statement generator: declare a row type's
//! column layout once, and render parameterized SQL (insert, update, delete,
//! select, select-count, create-table, dialect upsert) plus the matching
//! positional argument array, without hand-written SQL or an ORM runtime.
//!
//! ## Overview
//!
//! - A row type implements [`TableRow`] (the declarative schema) and
//!   [`RowValues`] (the uniform column accessor).
//! - [`SchemaRegistry`] resolves each type's schema into an immutable
//!   [`TableInfo`] descriptor exactly once per process: ordered columns,
//!   primary keys, and precompiled insert/update templates.
//! - [`SqlMaker`] renders statements from the cached descriptor. Text and
//!   argument arrays come from the same column ordering, so placeholders and
//!   values always line up.
//! - A [`Dialect`] overrides column-type rendering and supplies upsert;
//!   everything else is identical across dialects.
//!
//! Executing the statements is the caller's business: the produced
//! [`Value`] arrays bind in order onto sqlx MySQL queries, but this crate
//! never opens a connection.
//!
//! ## Quick Start
//!
//! ```
//! use minorm::{Column, DataType, Query, RowValues, SqlMaker, TableRow, TableSchema, Value};
//!
//! struct Name {
//!     id: i64,
//!     firstname: String,
//!     lastname: String,
//! }
//!
//! impl RowValues for Name {
//!     fn get(&self, column: &str) -> Value {
//!         match column {
//!             "id" => self.id.into(),
//!             "firstname" => self.firstname.as_str().into(),
//!             "lastname" => self.lastname.as_str().into(),
//!             _ => Value::Null,
//!         }
//!     }
//! }
//!
//! impl TableRow for Name {
//!     fn schema() -> TableSchema {
//!         TableSchema::new()
//!             .column(Column::new("id", DataType::BigInt).primary_key().generated())
//!             .column(Column::new("firstname", DataType::Text))
//!             .column(Column::new("lastname", DataType::Text))
//!     }
//! }
//!
//! let maker = SqlMaker::new();
//! let row = Name { id: 0, firstname: "John".into(), lastname: "Doe".into() };
//!
//! let sql = maker.insert_sql::<Name>(&Query::new()).unwrap();
//! let args = maker.insert_args(&row);
//! assert_eq!(sql, "insert into names (firstname,lastname) values (?,?)");
//! assert_eq!(args.len(), sql.matches('?').count());
//! ```

pub mod error;
pub mod maker;
mod naming;
pub mod query;
pub mod row;
pub mod schema;
pub mod value;

pub use error::DbError;
pub use maker::{AnsiDialect, Dialect, MySqlDialect, SqlMaker, default_column_type};
pub use query::Query;
pub use row::{DynamicRow, RowValues, TableRow};
pub use schema::{Column, ColumnMeta, DataType, SchemaRegistry, TableInfo, TableSchema};
pub use value::Value;
