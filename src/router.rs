use parking_lot::RwLock;
use std::sync::Arc;

use crate::loader::LoadResult;
use crate::table::RouteTable;

/// Build-then-swap holder for hot reload.
///
/// `reload` builds a complete new table off to the side and publishes it
/// with a single swap, so in-flight matchers holding a snapshot observe
/// either the fully-old or fully-new table, never a partial one. A failed
/// reload leaves the current table serving.
#[derive(Debug)]
pub struct Router {
    prefix: String,
    table: RwLock<Arc<RouteTable>>,
}

impl Router {
    pub fn from_source(source: &str, prefix: &str) -> LoadResult<Self> {
        let table = RouteTable::load(source, prefix)?;
        Ok(Self {
            prefix: table.prefix().to_string(),
            table: RwLock::new(Arc::new(table)),
        })
    }

    /// The currently published table. Callers match against the snapshot
    /// without holding any lock.
    pub fn snapshot(&self) -> Arc<RouteTable> {
        self.table.read().clone()
    }

    pub fn reload(&self, source: &str) -> LoadResult<()> {
        let fresh = Arc::new(RouteTable::load(source, &self.prefix)?);
        let routes = fresh.len();
        *self.table.write() = fresh;
        tracing::debug!(routes, "route table swapped");
        Ok(())
    }
}
