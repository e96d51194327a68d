//! MySQL Dialect
//!
//! Extends the base maker with MySQL's `insert ... on duplicate key update`
//! upsert. The type mapping is inherited unchanged; the base defaults
//! (`bigint`, `datetime`, `auto_increment`, ...) are already MySQL-valid.

use crate::error::DbError;
use crate::maker::dialect::Dialect;
use crate::row::RowValues;
use crate::schema::table::TableInfo;
use crate::value::Value;

/// MySQL flavor: upsert via `on duplicate key update`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    /// The insert template plus a `values(col)` reassignment for every
    /// non-key, non-generated column, so a conflicting row is overwritten
    /// with the incoming values and no extra placeholders are needed.
    ///
    /// ```sql
    /// insert into names (firstname,lastname) values (?,?)
    ///     on duplicate key update firstname=values(firstname),lastname=values(lastname)
    /// ```
    fn upsert_sql(&self, info: &TableInfo, table: &str) -> Result<String, DbError> {
        if info.update_columns.is_empty() {
            return Err(DbError::UnsupportedOperation(
                "upsert needs at least one non-key column to reassign on conflict",
            ));
        }
        let updates = info
            .update_columns
            .iter()
            .map(|column| format!("{column}=values({column})"))
            .collect::<Vec<_>>()
            .join(",");
        Ok(format!(
            "{} on duplicate key update {updates}",
            TableInfo::render(&info.insert_sql, table)
        ))
    }

    /// Identical to the insert argument array; the update clause reuses the
    /// inserted values.
    fn upsert_args(&self, info: &TableInfo, row: &dyn RowValues) -> Result<Vec<Value>, DbError> {
        Ok(info
            .insert_columns
            .iter()
            .map(|column| row.get(column))
            .collect())
    }
}
