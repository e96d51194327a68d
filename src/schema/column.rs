//! Column Descriptors
//!
//! A [`Column`] describes one mapped database column: its name, semantic
//! data type, role flags, and optional metadata overrides. Columns are
//! declared with a small builder and collected into a
//! [`TableSchema`](crate::TableSchema).

/// Semantic value type of a column.
///
/// Used only to pick a default column type in `create table` statements;
/// runtime values are never validated against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 32-bit integer, rendered `integer`.
    Int,
    /// 64-bit integer, rendered `bigint`.
    BigInt,
    /// Double-precision float, rendered `double`.
    Double,
    /// Single-precision float, rendered `float`.
    Float,
    /// Arbitrary-precision decimal, rendered `decimal(precision,scale)`.
    Decimal,
    /// Point in time, rendered `datetime`.
    Timestamp,
    /// Text, rendered `varchar(length)`.
    Text,
}

/// Optional per-column overrides for `create table` rendering.
///
/// Absent values fall back to defaults at render time: length 255,
/// precision 10, scale 2, nullable, not unique. A raw `definition` wins
/// over everything else, including the column name and derived type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub nullable: bool,
    pub unique: bool,
    pub definition: Option<String>,
}

impl Default for ColumnMeta {
    fn default() -> Self {
        Self {
            length: None,
            precision: None,
            scale: None,
            nullable: true,
            unique: false,
            definition: None,
        }
    }
}

impl ColumnMeta {
    pub fn length_or_default(&self) -> u32 {
        self.length.unwrap_or(255)
    }

    pub fn precision_or_default(&self) -> u32 {
        self.precision.unwrap_or(10)
    }

    pub fn scale_or_default(&self) -> u32 {
        self.scale.unwrap_or(2)
    }
}

/// One mapped column.
///
/// # Example
///
/// ```
/// use minorm::{Column, DataType};
///
/// let id = Column::new("id", DataType::BigInt).primary_key().generated();
/// let name = Column::new("name", DataType::Text).length(40).not_null();
/// let price = Column::new("price", DataType::Decimal).precision(12).scale(3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Database column name.
    pub name: String,
    /// Semantic value type.
    pub data_type: DataType,
    /// Part of the primary key.
    pub primary_key: bool,
    /// Value assigned by the database (auto-increment); excluded from
    /// insert and update value lists.
    pub generated: bool,
    /// Excluded from all generated SQL and argument arrays.
    pub transient: bool,
    /// Rendering overrides.
    pub meta: ColumnMeta,
}

impl Column {
    /// Creates a column with the given database name and semantic type.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            primary_key: false,
            generated: false,
            transient: false,
            meta: ColumnMeta::default(),
        }
    }

    /// Marks this column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks this column as server-assigned (e.g. auto-increment).
    pub fn generated(mut self) -> Self {
        self.generated = true;
        self
    }

    /// Excludes this column from all generated SQL.
    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Sets the rendered length for text columns.
    pub fn length(mut self, length: u32) -> Self {
        self.meta.length = Some(length);
        self
    }

    /// Sets the rendered precision for decimal columns.
    pub fn precision(mut self, precision: u32) -> Self {
        self.meta.precision = Some(precision);
        self
    }

    /// Sets the rendered scale for decimal columns.
    pub fn scale(mut self, scale: u32) -> Self {
        self.meta.scale = Some(scale);
        self
    }

    /// Adds a `not null` constraint in `create table` output.
    pub fn not_null(mut self) -> Self {
        self.meta.nullable = false;
        self
    }

    /// Adds a `unique` constraint in `create table` output.
    pub fn unique(mut self) -> Self {
        self.meta.unique = true;
        self
    }

    /// Replaces the whole column clause in `create table` output with raw
    /// text. The name and derived type are not emitted when this is set.
    pub fn definition(mut self, definition: impl Into<String>) -> Self {
        self.meta.definition = Some(definition.into());
        self
    }
}
