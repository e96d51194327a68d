//! Row Type Traits
//!
//! This module defines the two traits a struct implements to take part in
//! statement generation, plus the [`DynamicRow`] placeholder for untyped
//! rows.
//!
//! [`TableRow::schema`] is the registration call: it declares the table
//! mapping once, and the registry caches the resolved descriptor for the
//! life of the process. [`RowValues::get`] is the uniform read accessor the
//! makers use to assemble argument arrays; whether a value comes straight
//! off a field or through some computed accessor is decided once, inside the
//! implementation, not re-resolved on every access.

use crate::schema::TableSchema;
use crate::value::Value;

/// Column-keyed access to one row instance's values.
///
/// The makers call [`get`](Self::get) once per template column, in template
/// order, to build each argument array. Column names are the database names
/// declared in the schema, not the Rust field names.
///
/// # Example
///
/// ```
/// use minorm::{RowValues, Value};
///
/// struct Name {
///     id: i64,
///     firstname: String,
///     lastname: String,
/// }
///
/// impl RowValues for Name {
///     fn get(&self, column: &str) -> Value {
///         match column {
///             "id" => self.id.into(),
///             "firstname" => self.firstname.as_str().into(),
///             "lastname" => self.lastname.as_str().into(),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait RowValues {
    /// Reads one column's value off this row.
    ///
    /// An unknown column name yields [`Value::Null`] by convention; the
    /// makers only ever ask for names declared in the schema.
    fn get(&self, column: &str) -> Value;

    /// Writes one column's value back onto this row.
    ///
    /// The default implementation discards the write. An executor that maps
    /// server-generated keys back onto inserted rows overrides this for the
    /// columns it needs.
    fn set(&mut self, column: &str, value: Value) {
        let _ = (column, value);
    }
}

/// A row type mapped to a single database table.
///
/// Implementations declare their column layout once via [`schema`]
/// (Self::schema); the registry resolves and caches the result on first use.
/// Declaration order of the columns is the canonical property order and
/// fixes the positional argument order of every generated statement.
pub trait TableRow: RowValues + 'static {
    /// Declares the table mapping for this type. Called at most once per
    /// process by the registry.
    fn schema() -> TableSchema
    where
        Self: Sized;
}

/// Placeholder row type for untyped access.
///
/// Maps no columns and no table, so selects render a `*` column list and
/// every operation that needs a table name requires a per-call override:
///
/// ```
/// use minorm::{DynamicRow, Query, SqlMaker};
///
/// let maker = SqlMaker::new();
/// let sql = maker
///     .select_count_sql::<DynamicRow>(&Query::new().table("names"))
///     .unwrap();
/// assert_eq!(sql, "select count(*) from names");
/// ```
pub struct DynamicRow;

impl RowValues for DynamicRow {
    fn get(&self, _column: &str) -> Value {
        Value::Null
    }
}

impl TableRow for DynamicRow {
    fn schema() -> TableSchema {
        TableSchema::unmapped()
    }
}
