//! Error Types
//!
//! All failures surfaced by the statement makers are configuration errors in
//! the row declarations or the call, never transient conditions. They are
//! returned immediately to the caller; nothing is retried or defaulted.

use thiserror::Error;

/// Errors raised while rendering SQL for a row type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DbError {
    /// An update or delete was requested for a row type that declares no
    /// primary key column, so no where clause can identify the row.
    #[error("no primary key declared for row type `{0}`")]
    MissingPrimaryKey(&'static str),

    /// No table name could be resolved from either the per-call [`Query`]
    /// override or the row type's schema.
    ///
    /// [`Query`]: crate::Query
    #[error("no table name: supply one on the query or map the row type to a table")]
    MissingTableName,

    /// The requested operation is not implemented by the active dialect.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}
