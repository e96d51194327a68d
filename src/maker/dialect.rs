//! Dialect Extension Point
//!
//! A [`Dialect`] supplies the two things that legitimately vary between SQL
//! flavors: the default column-type text used by `create table`, and the
//! upsert statement. Templates, orderings, and placeholder conventions are
//! fixed by the base maker and identical across dialects.

use crate::error::DbError;
use crate::row::RowValues;
use crate::schema::column::{Column, DataType};
use crate::schema::table::TableInfo;
use crate::value::Value;

/// Column-type and upsert capabilities of one SQL flavor.
///
/// Both methods have defaults: the standard type mapping, and an
/// unsupported-operation failure for upsert. A dialect overrides only what
/// it actually changes.
pub trait Dialect {
    /// Renders the column-type text for one column, used when the column
    /// declares no raw definition.
    fn column_type(&self, column: &Column) -> String {
        default_column_type(column)
    }

    /// Renders the upsert statement for a descriptor, with `table` already
    /// resolved.
    fn upsert_sql(&self, info: &TableInfo, table: &str) -> Result<String, DbError> {
        let _ = (info, table);
        Err(DbError::UnsupportedOperation(
            "upsert has no portable form; use a dialect that provides one, such as MySqlDialect",
        ))
    }

    /// Produces the argument array matching [`upsert_sql`](Self::upsert_sql).
    fn upsert_args(&self, info: &TableInfo, row: &dyn RowValues) -> Result<Vec<Value>, DbError> {
        let _ = (info, row);
        Err(DbError::UnsupportedOperation(
            "upsert has no portable form; use a dialect that provides one, such as MySqlDialect",
        ))
    }
}

/// The neutral ANSI-flavored dialect: standard type mapping, no upsert.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiDialect;

impl Dialect for AnsiDialect {}

/// Standard column-type derivation, used when no dialect override applies.
///
/// Length, precision, and scale come from the column metadata, with
/// defaults of 255, 10, and 2.
pub fn default_column_type(column: &Column) -> String {
    match column.data_type {
        DataType::Int => "integer".to_string(),
        DataType::BigInt => "bigint".to_string(),
        DataType::Double => "double".to_string(),
        DataType::Float => "float".to_string(),
        DataType::Decimal => format!(
            "decimal({},{})",
            column.meta.precision_or_default(),
            column.meta.scale_or_default()
        ),
        DataType::Timestamp => "datetime".to_string(),
        DataType::Text => format!("varchar({})", column.meta.length_or_default()),
    }
}
