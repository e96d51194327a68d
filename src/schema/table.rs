//! Table Schemas and Descriptors
//!
//! [`TableSchema`] is the declarative input a row type hands back from
//! [`TableRow::schema`](crate::TableRow::schema). [`TableInfo`] is the
//! resolved, immutable descriptor the registry builds from it exactly once:
//! the ordered mapped columns, the primary-key list, and the precompiled
//! insert/update templates together with their argument orderings.
//!
//! The same column ordering drives both the SQL text and the argument
//! arrays, so the two can never disagree about which value binds to which
//! placeholder.

use crate::naming::derive_table_name;
use crate::schema::column::Column;

#[derive(Debug, Clone)]
pub(crate) enum TableNaming {
    /// Derive the name from the Rust type name.
    Derived,
    /// Use this exact name.
    Explicit(String),
    /// No table name; every call must supply an override.
    Unmapped,
}

/// Declarative table mapping for one row type.
///
/// # Example
///
/// ```
/// use minorm::{Column, DataType, TableSchema};
///
/// let schema = TableSchema::new()
///     .column(Column::new("id", DataType::BigInt).primary_key().generated())
///     .column(Column::new("firstname", DataType::Text))
///     .column(Column::new("lastname", DataType::Text));
/// ```
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub(crate) naming: TableNaming,
    pub(crate) columns: Vec<Column>,
}

impl TableSchema {
    /// A schema whose table name is derived from the Rust type name
    /// (snake_cased and pluralized: `Name` maps to `names`).
    pub fn new() -> Self {
        Self {
            naming: TableNaming::Derived,
            columns: Vec::new(),
        }
    }

    /// A schema with an explicit table name.
    pub fn named(table: impl Into<String>) -> Self {
        Self {
            naming: TableNaming::Explicit(table.into()),
            columns: Vec::new(),
        }
    }

    /// A schema with no table name and no mapped columns; selects render
    /// `*` and table names must be supplied per call.
    pub fn unmapped() -> Self {
        Self {
            naming: TableNaming::Unmapped,
            columns: Vec::new(),
        }
    }

    /// Appends a column. Declaration order is the positional argument order
    /// of every generated statement.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }
}

impl Default for TableSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved descriptor for one row type, built once and cached.
///
/// Published behind an `Arc` by the registry and never mutated afterwards.
/// The same input schema always produces byte-identical templates.
#[derive(Debug)]
pub struct TableInfo {
    /// Rust type name the descriptor was built for; used in diagnostics.
    pub row_type: &'static str,
    /// Resolved table name; `None` for unmapped row types.
    pub table: Option<String>,
    /// Mapped columns in declaration order, transient columns dropped.
    pub columns: Vec<Column>,
    /// Primary-key column names in declaration order.
    pub primary_keys: Vec<String>,
    /// Insert template with a `{table}` substitution point.
    pub insert_sql: String,
    /// Column names bound by the insert template, in placeholder order.
    pub insert_columns: Vec<String>,
    /// Update template with a `{table}` substitution point; `None` when the
    /// type declares no primary key, or when every column belongs to it.
    pub update_sql: Option<String>,
    /// Column names bound by the update set clause, in placeholder order.
    /// Primary-key values follow these in the full argument array.
    pub update_columns: Vec<String>,
    /// Comma-joined select column list, or `*` when no columns are mapped.
    pub select_columns: String,
}

impl TableInfo {
    pub(crate) fn build(schema: TableSchema, row_type: &'static str) -> Self {
        let table = match schema.naming {
            TableNaming::Derived => Some(derive_table_name(row_type)),
            TableNaming::Explicit(name) => Some(name),
            TableNaming::Unmapped => None,
        };

        let columns: Vec<Column> = schema
            .columns
            .into_iter()
            .filter(|column| !column.transient)
            .collect();

        let primary_keys: Vec<String> = columns
            .iter()
            .filter(|column| column.primary_key)
            .map(|column| column.name.clone())
            .collect();

        // generated keys are assigned by the database, so inserts skip them
        let insert_columns: Vec<String> = columns
            .iter()
            .filter(|column| !column.generated)
            .map(|column| column.name.clone())
            .collect();
        let placeholders = vec!["?"; insert_columns.len()].join(",");
        let insert_sql = format!(
            "insert into {{table}} ({}) values ({placeholders})",
            insert_columns.join(",")
        );

        let update_columns: Vec<String> = columns
            .iter()
            .filter(|column| !column.primary_key && !column.generated)
            .map(|column| column.name.clone())
            .collect();
        // no template when there is no key to match on, or nothing left to set
        let update_sql = (!primary_keys.is_empty() && !update_columns.is_empty()).then(|| {
            let sets = update_columns
                .iter()
                .map(|column| format!("{column}=?"))
                .collect::<Vec<_>>()
                .join(",");
            let keys = primary_keys
                .iter()
                .map(|column| format!("{column}=?"))
                .collect::<Vec<_>>()
                .join(" and ");
            format!("update {{table}} set {sets} where {keys}")
        });

        let select_columns = if columns.is_empty() {
            "*".to_string()
        } else {
            columns
                .iter()
                .map(|column| column.name.as_str())
                .collect::<Vec<_>>()
                .join(",")
        };

        Self {
            row_type,
            table,
            columns,
            primary_keys,
            insert_sql,
            insert_columns,
            update_sql,
            update_columns,
            select_columns,
        }
    }

    /// Number of `?` placeholders in the insert template.
    pub fn insert_arg_count(&self) -> usize {
        self.insert_columns.len()
    }

    /// Number of `?` placeholders in the update template: set-clause
    /// columns plus primary-key columns.
    pub fn update_arg_count(&self) -> usize {
        self.update_columns.len() + self.primary_keys.len()
    }

    /// Substitutes the resolved table name into a template.
    pub fn render(template: &str, table: &str) -> String {
        template.replacen("{table}", table, 1)
    }
}
