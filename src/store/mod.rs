//! # Anchor Store Contract
//!
//! Batch update and validation read anchors through this trait. Where and
//! how anchors are persisted is up to the implementation.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | In-memory, for tests and embedding |

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;
use crate::Result;

pub use memory::MemoryStore;

/// Opaque anchor identifier, unique within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnchorId(pub u64);

impl std::fmt::Display for AnchorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage for anchors keyed by [`AnchorId`].
///
/// Methods take `&self`; implementations handle their own locking.
pub trait AnchorStore {
    /// Store a new anchor and return its id.
    fn add(&self, anchor: Anchor) -> Result<AnchorId>;

    /// Get an anchor by id. Returns `None` if not found.
    fn get(&self, id: AnchorId) -> Result<Option<Anchor>>;

    /// Overwrite an existing anchor. Fails with `Error::NotFound` if `id`
    /// is unknown.
    fn replace(&self, id: AnchorId, anchor: Anchor) -> Result<()>;

    /// Remove an anchor. Returns true if it existed.
    fn remove(&self, id: AnchorId) -> Result<bool>;

    /// Every id currently stored, in ascending order.
    fn ids(&self) -> Result<Vec<AnchorId>>;

    fn len(&self) -> Result<usize> {
        Ok(self.ids()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
