//! SQL Statement Makers
//!
//! - `standard.rs` - the base maker: insert, update, delete, select,
//!   select-count, create-table, and dialect-routed upsert
//! - `dialect.rs` - the dialect capability trait and the neutral
//!   [`AnsiDialect`]
//! - `mysql.rs` - the MySQL dialect with `on duplicate key update` upsert

pub mod dialect;
pub mod mysql;
pub mod standard;

pub use dialect::{AnsiDialect, Dialect, default_column_type};
pub use mysql::MySqlDialect;
pub use standard::SqlMaker;
