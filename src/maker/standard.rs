//! Statement Maker
//!
//! [`SqlMaker`] turns a row type (and, for writes, a row instance) into SQL
//! text plus the positional argument array matching its `?` placeholders.
//! Descriptors are fetched through the registry, so the reflective cost of a
//! row type is paid once; rendering afterwards is string assembly only.
//!
//! Text and arguments for one operation are always derived from the same
//! cached column ordering. Callers must keep the pair together: binding an
//! argument array against SQL from a different operation (or a different row
//! type) silently corrupts data.
//!
//! ## Generated SQL Examples
//!
//! ```sql
//! insert into names (firstname,lastname) values (?,?)
//! update names set firstname=?,lastname=? where id=?
//! delete from names where id=?
//! select id,firstname,lastname from names where firstname=? order by lastname
//! select count(*) from names
//! create table names (id bigint auto_increment, firstname varchar(255),
//!     lastname varchar(255), primary key (id))
//! ```

use std::sync::Arc;

use crate::error::DbError;
use crate::maker::dialect::{AnsiDialect, Dialect};
use crate::query::Query;
use crate::row::TableRow;
use crate::schema::registry::SchemaRegistry;
use crate::schema::table::TableInfo;
use crate::value::Value;

/// Renders parameterized SQL for registered row types.
///
/// A maker owns (or shares) a [`SchemaRegistry`] and a [`Dialect`]. All
/// methods are `&self` and safe to call from multiple threads; no method
/// performs I/O.
///
/// # Example
///
/// ```
/// use minorm::{Column, DataType, Query, RowValues, SqlMaker, TableRow, TableSchema, Value};
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
///
/// impl TableRow for Name {
///     fn schema() -> TableSchema {
///         TableSchema::new()
///             .column(Column::new("id", DataType::BigInt).primary_key().generated())
///             .column(Column::new("firstname", DataType::Text))
///             .column(Column::new("lastname", DataType::Text))
///     }
/// }
///
/// let maker = SqlMaker::new();
/// let sql = maker.insert_sql::<Name>(&Query::new()).unwrap();
/// assert_eq!(sql, "insert into names (firstname,lastname) values (?,?)");
/// ```
pub struct SqlMaker<D: Dialect = AnsiDialect> {
    registry: Arc<SchemaRegistry>,
    dialect: D,
}

impl SqlMaker<AnsiDialect> {
    /// A maker with the neutral ANSI dialect and a fresh registry.
    pub fn new() -> Self {
        Self::with_dialect(AnsiDialect)
    }
}

impl Default for SqlMaker<AnsiDialect> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dialect> SqlMaker<D> {
    /// A maker with the given dialect and a fresh registry.
    pub fn with_dialect(dialect: D) -> Self {
        Self {
            registry: Arc::new(SchemaRegistry::new()),
            dialect,
        }
    }

    /// A maker sharing an existing registry, so descriptors built through
    /// one maker are visible to others.
    pub fn with_registry(dialect: D, registry: Arc<SchemaRegistry>) -> Self {
        Self { registry, dialect }
    }

    /// The maker's registry handle.
    pub fn registry(&self) -> Arc<SchemaRegistry> {
        Arc::clone(&self.registry)
    }

    fn resolve_table<'a>(query: &'a Query, info: &'a TableInfo) -> Result<&'a str, DbError> {
        query
            .table
            .as_deref()
            .or(info.table.as_deref())
            .ok_or(DbError::MissingTableName)
    }

    /// Insert statement for `R`. Args follow with
    /// [`insert_args`](Self::insert_args), in descriptor column order;
    /// generated columns are excluded, non-generated primary keys are
    /// included.
    pub fn insert_sql<R: TableRow>(&self, query: &Query) -> Result<String, DbError> {
        let info = self.registry.lookup::<R>();
        let table = Self::resolve_table(query, &info)?;
        Ok(TableInfo::render(&info.insert_sql, table))
    }

    /// Argument array for the insert statement, in placeholder order.
    pub fn insert_args<R: TableRow>(&self, row: &R) -> Vec<Value> {
        let info = self.registry.lookup::<R>();
        info.insert_columns
            .iter()
            .map(|column| row.get(column))
            .collect()
    }

    /// Update statement for `R`: set clause over the non-key, non-generated
    /// columns, where clause over the primary keys.
    pub fn update_sql<R: TableRow>(&self, query: &Query) -> Result<String, DbError> {
        let info = self.registry.lookup::<R>();
        if info.primary_keys.is_empty() {
            return Err(DbError::MissingPrimaryKey(info.row_type));
        }
        let template = info.update_sql.as_deref().ok_or(DbError::UnsupportedOperation(
            "every column belongs to the primary key; there is nothing to update",
        ))?;
        let table = Self::resolve_table(query, &info)?;
        Ok(TableInfo::render(template, table))
    }

    /// Argument array for the update statement: set-clause values first, in
    /// descriptor column order, then primary-key values for the where
    /// clause, in declaration order.
    pub fn update_args<R: TableRow>(&self, row: &R) -> Result<Vec<Value>, DbError> {
        let info = self.registry.lookup::<R>();
        if info.primary_keys.is_empty() {
            return Err(DbError::MissingPrimaryKey(info.row_type));
        }
        if info.update_columns.is_empty() {
            return Err(DbError::UnsupportedOperation(
                "every column belongs to the primary key; there is nothing to update",
            ));
        }
        let mut args: Vec<Value> = info
            .update_columns
            .iter()
            .map(|column| row.get(column))
            .collect();
        args.extend(info.primary_keys.iter().map(|column| row.get(column)));
        Ok(args)
    }

    /// Delete statement for `R`, keyed on every primary-key column.
    pub fn delete_sql<R: TableRow>(&self, query: &Query) -> Result<String, DbError> {
        let info = self.registry.lookup::<R>();
        if info.primary_keys.is_empty() {
            return Err(DbError::MissingPrimaryKey(info.row_type));
        }
        let table = Self::resolve_table(query, &info)?;
        let keys = info
            .primary_keys
            .iter()
            .map(|column| format!("{column}=?"))
            .collect::<Vec<_>>()
            .join(" and ");
        Ok(format!("delete from {table} where {keys}"))
    }

    /// Argument array for the delete statement: primary-key values in
    /// declaration order.
    pub fn delete_args<R: TableRow>(&self, row: &R) -> Result<Vec<Value>, DbError> {
        let info = self.registry.lookup::<R>();
        if info.primary_keys.is_empty() {
            return Err(DbError::MissingPrimaryKey(info.row_type));
        }
        Ok(info
            .primary_keys
            .iter()
            .map(|column| row.get(column))
            .collect())
    }

    /// Select statement for `R`. Where and order-by text from the query is
    /// appended verbatim; any placeholders inside it are bound by the
    /// caller, not by this maker.
    pub fn select_sql<R: TableRow>(&self, query: &Query) -> Result<String, DbError> {
        let info = self.registry.lookup::<R>();
        let table = Self::resolve_table(query, &info)?;
        let mut out = format!("select {} from {table}", info.select_columns);
        if let Some(where_text) = &query.where_text {
            out.push_str(" where ");
            out.push_str(where_text);
        }
        if let Some(order_by) = &query.order_by {
            out.push_str(" order by ");
            out.push_str(order_by);
        }
        Ok(out)
    }

    /// Count statement. Use [`DynamicRow`](crate::DynamicRow) with a table
    /// override when no mapped row type applies.
    pub fn select_count_sql<R: TableRow>(&self, query: &Query) -> Result<String, DbError> {
        let info = self.registry.lookup::<R>();
        let table = Self::resolve_table(query, &info)?;
        let mut out = format!("select count(*) from {table}");
        if let Some(where_text) = &query.where_text {
            out.push_str(" where ");
            out.push_str(where_text);
        }
        Ok(out)
    }

    /// Create-table statement for `R`.
    ///
    /// Each mapped column renders as its raw definition text when one is
    /// declared, otherwise as name, dialect column type, and any
    /// `auto_increment`/`unique`/`not null` suffixes its flags and metadata
    /// call for. A trailing composite `primary key (...)` clause is added
    /// when the type declares keys.
    pub fn create_table_sql<R: TableRow>(&self) -> Result<String, DbError> {
        let info = self.registry.lookup::<R>();
        let table = info.table.as_deref().ok_or(DbError::MissingTableName)?;

        let mut out = format!("create table {table} (");
        for (i, column) in info.columns.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            match &column.meta.definition {
                Some(definition) => out.push_str(definition),
                None => {
                    out.push_str(&column.name);
                    out.push(' ');
                    out.push_str(&self.dialect.column_type(column));
                    if column.generated {
                        out.push_str(" auto_increment");
                    }
                    if column.meta.unique {
                        out.push_str(" unique");
                    }
                    if !column.meta.nullable {
                        out.push_str(" not null");
                    }
                }
            }
        }

        if !info.primary_keys.is_empty() {
            out.push_str(", primary key (");
            out.push_str(&info.primary_keys.join(","));
            out.push(')');
        }
        out.push(')');
        Ok(out)
    }

    /// Upsert statement, rendered by the dialect. The base
    /// [`AnsiDialect`] has no upsert and fails with
    /// [`DbError::UnsupportedOperation`].
    pub fn upsert_sql<R: TableRow>(&self, query: &Query) -> Result<String, DbError> {
        let info = self.registry.lookup::<R>();
        let table = Self::resolve_table(query, &info)?;
        self.dialect.upsert_sql(&info, table)
    }

    /// Argument array for the upsert statement, ordered by the dialect.
    pub fn upsert_args<R: TableRow>(&self, row: &R) -> Result<Vec<Value>, DbError> {
        let info = self.registry.lookup::<R>();
        self.dialect.upsert_args(&info, row)
    }
}
