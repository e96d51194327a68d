//! Per-call statement options.
//!
//! A [`Query`] carries the three things a caller may vary per call without
//! touching the row type's schema: a table-name override, an opaque where
//! clause, and an opaque order-by clause. Where and order-by text is passed
//! through unparsed; placeholders inside it are the caller's responsibility.

/// Options applied to a single statement rendering.
///
/// The table override always wins over the table name resolved from the row
/// type's schema.
///
/// # Example
///
/// ```
/// use minorm::Query;
///
/// let query = Query::new()
///     .table("legacy_names")
///     .where_clause("firstname=?")
///     .order_by("lastname");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Query {
    pub(crate) table: Option<String>,
    pub(crate) where_text: Option<String>,
    pub(crate) order_by: Option<String>,
}

impl Query {
    /// Creates an empty query: no override, no where clause, no ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the table name for this call.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the where clause text, without the leading `where` keyword.
    /// The text is emitted verbatim.
    pub fn where_clause(mut self, where_text: impl Into<String>) -> Self {
        self.where_text = Some(where_text.into());
        self
    }

    /// Sets the order-by text, without the leading `order by` keywords.
    /// The text is emitted verbatim.
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }
}
