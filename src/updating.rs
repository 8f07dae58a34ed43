//! # Drift Resolution
//!
//! Re-locate an anchor after its file has been edited.
//!
//! The anchor's recorded `before + topic + after` is aligned against the
//! whole current file. The first optimal alignment decides where each topic
//! char went; the new topic starts at the first surviving position and is as
//! wide as the number of survivors.
//!
//! ```text
//! stored context ─┐
//!                 ├─► align ─► first alignment ─► topic chars in new text ─► new Anchor
//! current file  ──┘
//! ```

use std::fs::File;
use std::io::Read;

use crate::alignment::{align, Correspondence, SimpleScorer};
use crate::anchor::{Anchor, Context};
use crate::store::{AnchorId, AnchorStore};
use crate::{AlignmentError, Error, Result};

// ============================================================================
// Updater
// ============================================================================

/// Drift resolver bound to a scoring policy.
///
/// `Updater::default()` uses the +3 / -3 / gap 2 policy that the free
/// functions in this module use.
#[derive(Debug, Clone, Copy, Default)]
pub struct Updater {
    scorer: SimpleScorer,
}

impl Updater {
    pub fn new(scorer: SimpleScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &SimpleScorer {
        &self.scorer
    }

    /// Update `anchor` against the current contents of its file on disk.
    pub fn update(&self, anchor: &Anchor) -> Result<Anchor> {
        let file = File::open(anchor.file_path())?;
        self.update_from_reader(anchor, file)
    }

    /// Update `anchor` against contents supplied by `reader`.
    pub fn update_from_reader<R: Read>(&self, anchor: &Anchor, mut reader: R) -> Result<Anchor> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.update_from_text(anchor, &text)
    }

    /// Update `anchor` against `text`, the file's current contents.
    pub fn update_from_text(&self, anchor: &Anchor, text: &str) -> Result<Anchor> {
        let ctx = anchor.context();
        let old: Vec<char> = ctx.full_text().chars().collect();
        let new: Vec<char> = text.chars().collect();

        let scorer = self.scorer;
        let mut alignments = align(
            &old,
            &new,
            |x, y| scorer.score(x, y),
            |n| scorer.gap_penalty(n),
        );
        let alignment = alignments.next().ok_or(AlignmentError::NoAlignments)?;

        let positions = topic_positions(ctx, &alignment);
        let Some(&offset) = positions.iter().min() else {
            return Err(AlignmentError::TopicNotMapped.into());
        };
        // Survivors need not be contiguous; the new width is their count.
        let width = positions.len();

        tracing::debug!(
            file = %anchor.file_path().display(),
            score = alignments.score(),
            old_offset = ctx.offset(),
            new_offset = offset,
            width,
            "resolved anchor drift"
        );

        let context = Context::from_text(text, offset, width, ctx.width)?;
        Anchor::new(anchor.file_path(), context, anchor.metadata().clone())
    }
}

/// Positions in the new text that the alignment matched to topic chars.
fn topic_positions(ctx: &Context, alignment: &[Correspondence]) -> Vec<usize> {
    let start = ctx.start();
    alignment
        .iter()
        .filter_map(|c| match *c {
            Correspondence::Both { a, b } => Some((a, b)),
            _ => None,
        })
        .filter(|&(a, _)| ctx.topic.contains(start + a))
        .map(|(_, b)| b)
        .collect()
}

// ============================================================================
// Entry points
// ============================================================================

/// Update an anchor from its file on disk.
pub fn update(anchor: &Anchor) -> Result<Anchor> {
    Updater::default().update(anchor)
}

/// Update an anchor from supplied file contents.
pub fn update_from_reader<R: Read>(anchor: &Anchor, reader: R) -> Result<Anchor> {
    Updater::default().update_from_reader(anchor, reader)
}

/// Update an anchor from the file's current text.
pub fn update_from_text(anchor: &Anchor, text: &str) -> Result<Anchor> {
    Updater::default().update_from_text(anchor, text)
}

// ============================================================================
// Batch update
// ============================================================================

/// Outcome of [`update_store`].
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Anchors rewritten in the store.
    pub updated: Vec<AnchorId>,
    /// Anchors left untouched, with the reason.
    pub failed: Vec<(AnchorId, Error)>,
}

impl UpdateReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Update every anchor in `store`, writing successes back.
///
/// A failure on one anchor is recorded and the run moves on; only store
/// errors abort.
pub fn update_store<S: AnchorStore + ?Sized>(store: &S) -> Result<UpdateReport> {
    let updater = Updater::default();
    let mut report = UpdateReport::default();

    for id in store.ids()? {
        let Some(anchor) = store.get(id)? else {
            continue;
        };

        match updater.update(&anchor) {
            Ok(updated) => {
                store.replace(id, updated)?;
                report.updated.push(id);
            }
            Err(e) => {
                tracing::warn!(anchor_id = %id, error = %e, "failed to update anchor");
                report.failed.push((id, e));
            }
        }
    }

    tracing::info!(
        updated = report.updated.len(),
        failed = report.failed.len(),
        "anchor store updated"
    );
    Ok(report)
}
