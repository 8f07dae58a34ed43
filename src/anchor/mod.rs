//! # Anchors
//!
//! An anchor ties opaque metadata to a region of a file. It records where
//! the region was (a char offset and width) and what it and its surroundings
//! looked like at the time, so later edits can be detected and followed.
//!
//! Anchors are values. Updating one produces a new `Anchor`.

pub mod context;

use std::fs::File;
use std::io::Read;
use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use context::{Context, Span};

/// Opaque user data carried by an anchor.
pub type Metadata = serde_json::Value;

/// Metadata bound to a region of a source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    file_path: PathBuf,
    context: Context,
    metadata: Metadata,
}

impl Anchor {
    /// Wrap an already computed context. `file_path` must be absolute.
    pub fn new(file_path: impl Into<PathBuf>, context: Context, metadata: Metadata) -> Result<Self> {
        let file_path = file_path.into();
        if !file_path.is_absolute() {
            return Err(Error::Path(file_path));
        }
        Ok(Self { file_path, context, metadata })
    }

    /// Build an anchor from in-memory contents of `file_path`.
    pub fn from_text(
        file_path: impl Into<PathBuf>,
        text: &str,
        offset: usize,
        width: usize,
        context_width: usize,
        metadata: Metadata,
    ) -> Result<Self> {
        let file_path = file_path.into();
        if !file_path.is_absolute() {
            return Err(Error::Path(file_path));
        }
        let context = Context::from_text(text, offset, width, context_width)?;
        Ok(Self { file_path, context, metadata })
    }

    /// Build an anchor reading the contents from `reader` instead of the file.
    pub fn from_reader<R: Read>(
        file_path: impl Into<PathBuf>,
        mut reader: R,
        offset: usize,
        width: usize,
        context_width: usize,
        metadata: Metadata,
    ) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_text(file_path, &text, offset, width, context_width, metadata)
    }

    /// Build an anchor by reading `file_path` from disk.
    pub fn open(
        file_path: impl Into<PathBuf>,
        offset: usize,
        width: usize,
        context_width: usize,
        metadata: Metadata,
    ) -> Result<Self> {
        let file_path = file_path.into();
        if !file_path.is_absolute() {
            return Err(Error::Path(file_path));
        }
        let file = File::open(&file_path)?;
        Self::from_reader(file_path, file, offset, width, context_width, metadata)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Char offset of the anchored text.
    pub fn offset(&self) -> usize {
        self.context.topic.offset
    }

    /// Width in chars of the anchored text.
    pub fn width(&self) -> usize {
        self.context.topic.len()
    }

    /// Nominal width of the before/after context.
    pub fn context_width(&self) -> usize {
        self.context.width
    }

    pub fn topic_range(&self) -> Range<usize> {
        self.offset()..self.offset() + self.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_text() {
        let anchor = Anchor::from_text("/source.py", "a\nb\nc\nd\ne", 4, 2, 4, json!({})).unwrap();
        assert_eq!(anchor.file_path(), Path::new("/source.py"));
        assert_eq!(anchor.context().before.text, "a\nb\n");
        assert_eq!(anchor.offset(), 4);
        assert_eq!(anchor.width(), 2);
        assert_eq!(anchor.topic_range(), 4..6);
        assert_eq!(anchor.context().after.text, "d\ne");
        assert_eq!(anchor.metadata(), &json!({}));
    }

    #[test]
    fn test_relative_path_rejected() {
        let err = Anchor::from_text("source.py", "contents", 0, 1, 1, json!({})).unwrap_err();
        assert!(matches!(err, Error::Path(p) if p == Path::new("source.py")));
    }

    #[test]
    fn test_too_wide_rejected() {
        let err = Anchor::from_text("/source.py", "abc", 1, 4, 4, json!(null)).unwrap_err();
        assert!(matches!(err, Error::ContextRead(crate::ContextReadError::Topic { .. })));
    }

    #[test]
    fn test_from_reader() {
        let anchor = Anchor::from_reader("/source.py", "aabbcc".as_bytes(), 2, 2, 2, json!({"k": 1})).unwrap();
        assert_eq!(anchor.context().full_text(), "aabbcc");
        assert_eq!(anchor.context_width(), 2);
    }

    #[test]
    fn test_serde_round_trip_preserves_metadata() {
        let meta = json!({"note": "check this", "tags": ["a", "b"], "n": 3});
        let anchor = Anchor::from_text("/source.py", "aabbcc", 2, 2, 2, meta).unwrap();
        let encoded = serde_json::to_string(&anchor).unwrap();
        let decoded: Anchor = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, anchor);
    }
}
