//! Descriptor Registry
//!
//! The registry maps row type identities to their resolved [`TableInfo`]
//! descriptors. A descriptor is built at most once per type for the life of
//! the process; every later lookup returns the cached `Arc` without touching
//! the schema declaration again.
//!
//! The build-and-publish sequence runs under the write lock, so concurrent
//! first uses of the same type race only for who builds, never over what
//! gets published: readers either miss entirely or see a complete
//! descriptor. A panic inside a row type's `schema()` leaves no entry
//! behind, and the next lookup retries from scratch.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::row::TableRow;
use crate::schema::table::TableInfo;

/// Process-lifetime cache of table descriptors, keyed by row type.
///
/// Construct one per [`SqlMaker`], or share a single registry across makers
/// with [`SqlMaker::with_registry`] by cloning the `Arc`. Entries are never
/// evicted or replaced.
///
/// [`SqlMaker`]: crate::SqlMaker
/// [`SqlMaker::with_registry`]: crate::SqlMaker::with_registry
#[derive(Default)]
pub struct SchemaRegistry {
    tables: RwLock<HashMap<TypeId, Arc<TableInfo>>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached descriptor for `R`, building and publishing it
    /// first if this is the type's first use.
    pub fn lookup<R: TableRow>(&self) -> Arc<TableInfo> {
        let key = TypeId::of::<R>();

        if let Some(info) = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(info);
        }

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(info) = tables.get(&key) {
            return Arc::clone(info);
        }

        let info = Arc::new(TableInfo::build(R::schema(), type_name::<R>()));
        debug!(
            row_type = info.row_type,
            table = info.table.as_deref().unwrap_or("*"),
            columns = info.columns.len(),
            "built table descriptor"
        );
        tables.insert(key, Arc::clone(&info));
        info
    }
}
