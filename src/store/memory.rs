//! In-memory anchor store.
//!
//! The reference implementation of `AnchorStore`: a `BTreeMap` behind a
//! `RwLock`, with ids handed out by an atomic counter. Nothing is persisted.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use super::{AnchorId, AnchorStore};
use crate::anchor::Anchor;
use crate::{Error, Result};

/// Anchors held in memory.
pub struct MemoryStore {
    anchors: RwLock<BTreeMap<AnchorId, Anchor>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            anchors: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorStore for MemoryStore {
    fn add(&self, anchor: Anchor) -> Result<AnchorId> {
        let id = AnchorId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.anchors.write().insert(id, anchor);
        Ok(id)
    }

    fn get(&self, id: AnchorId) -> Result<Option<Anchor>> {
        Ok(self.anchors.read().get(&id).cloned())
    }

    fn replace(&self, id: AnchorId, anchor: Anchor) -> Result<()> {
        match self.anchors.write().get_mut(&id) {
            Some(slot) => {
                *slot = anchor;
                Ok(())
            }
            None => Err(Error::NotFound(id)),
        }
    }

    fn remove(&self, id: AnchorId) -> Result<bool> {
        Ok(self.anchors.write().remove(&id).is_some())
    }

    fn ids(&self) -> Result<Vec<AnchorId>> {
        Ok(self.anchors.read().keys().copied().collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.anchors.read().len())
    }
}
