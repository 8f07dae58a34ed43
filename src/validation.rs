//! # Validation
//!
//! Detect anchors whose files changed underneath them.
//!
//! Unlike [`updating`](crate::updating), nothing is aligned here. The context
//! is re-read at the anchor's recorded offset and width and compared with
//! what was stored. Any difference is reported as a line diff; the anchor
//! itself is left alone.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::anchor::{Anchor, Context};
use crate::store::{AnchorId, AnchorStore};
use crate::Result;

/// Line diff between an anchor's stored context and the file's current text
/// at the same coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorDiff {
    /// Whether the two contexts differ at all.
    pub changed: bool,
    /// `---`/`+++` header followed by lines prefixed with `-`, `+` or ` `.
    pub lines: Vec<String>,
}

impl fmt::Display for AnchorDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Split keeping the `\n` on each line, so a missing final newline shows up
/// as a change.
fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Diff two contexts of the same file.
pub fn diff_contexts(file_name: &str, original: &Context, current: &Context) -> AnchorDiff {
    let old_text = original.full_text();
    let new_text = current.full_text();
    let old_lines = split_lines(&old_text);
    let new_lines = split_lines(&new_text);

    let mut lines = vec![
        format!("--- {file_name} [original]"),
        format!("+++ {file_name} [current]"),
    ];
    for change in diff::slice(&old_lines, &new_lines) {
        let (prefix, line) = match change {
            diff::Result::Left(l) => ('-', *l),
            diff::Result::Both(l, _) => (' ', *l),
            diff::Result::Right(r) => ('+', *r),
        };
        lines.push(format!("{prefix}{}", line.trim_end_matches('\n')));
    }

    AnchorDiff { changed: original != current, lines }
}

/// Compare `anchor` with its file's text `text` at the recorded coordinates.
pub fn anchor_diff_from_text(anchor: &Anchor, text: &str) -> Result<AnchorDiff> {
    let stored = anchor.context();
    let fresh = Context::from_text(text, anchor.offset(), anchor.width(), anchor.context_width())?;
    Ok(diff_contexts(&anchor.file_path().display().to_string(), stored, &fresh))
}

/// Compare `anchor` with its file on disk at the recorded coordinates.
pub fn anchor_diff(anchor: &Anchor) -> Result<AnchorDiff> {
    let text = fs::read_to_string(anchor.file_path())?;
    anchor_diff_from_text(anchor, &text)
}

/// Lazy walk over a store yielding the anchors whose context has drifted.
///
/// Unchanged anchors are skipped. Read failures are yielded as errors and
/// the walk continues with the next anchor.
pub struct Validation<'s, S: AnchorStore + ?Sized> {
    store: &'s S,
    ids: std::vec::IntoIter<AnchorId>,
}

impl<S: AnchorStore + ?Sized> Iterator for Validation<'_, S> {
    type Item = Result<(PathBuf, AnchorDiff)>;

    fn next(&mut self) -> Option<Self::Item> {
        for id in self.ids.by_ref() {
            let anchor = match self.store.get(id) {
                Ok(Some(anchor)) => anchor,
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            };

            match anchor_diff(&anchor) {
                Ok(diff) if diff.changed => {
                    tracing::debug!(anchor_id = %id, "anchor context changed");
                    return Some(Ok((anchor.file_path().to_path_buf(), diff)));
                }
                Ok(_) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

/// Validate every anchor in `store` against its file.
pub fn validate<S: AnchorStore + ?Sized>(store: &S) -> Result<Validation<'_, S>> {
    Ok(Validation { store, ids: store.ids()?.into_iter() })
}
