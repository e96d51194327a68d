//! Schema Metadata
//!
//! Everything the makers know about a row type lives here:
//!
//! - `column.rs` - per-column descriptors and their builder
//! - `table.rs` - declarative schemas and the resolved, template-bearing
//!   table descriptor
//! - `registry.rs` - the once-per-type descriptor cache

pub mod column;
pub mod registry;
pub mod table;

pub use column::{Column, ColumnMeta, DataType};
pub use registry::SchemaRegistry;
pub use table::{TableInfo, TableSchema};
