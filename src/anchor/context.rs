//! Context: the anchored topic plus its bracketing text.
//!
//! ```text
//!   Text before the anchor text in the topic text after the anchor.
//!          <--- before ---><-- topic ------><--- after --->
//! ```
//!
//! All offsets and widths count Unicode scalar values (chars), not bytes.

use serde::{Deserialize, Serialize};

use crate::ContextReadError;

/// A slice of file contents at a known char offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub offset: usize,
    pub text: String,
}

impl Span {
    pub fn new(offset: usize, text: impl Into<String>) -> Self {
        Self { offset, text: text.into() }
    }

    /// Width in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// One past the last char offset covered.
    pub fn end(&self) -> usize {
        self.offset + self.len()
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.offset && offset < self.end()
    }
}

/// The topic of an anchor and the text around it.
///
/// `width` is the nominal context width that was requested; `before` and
/// `after` can be shorter near the start or end of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub topic: Span,
    pub before: Span,
    pub after: Span,
    pub width: usize,
}

impl Context {
    /// Cut a context out of `text` around `width` chars at `offset`.
    ///
    /// Fails if fewer than `width` chars exist at `offset`, or if the before
    /// text cannot be read in full. A short after text is accepted.
    pub fn from_text(
        text: &str,
        offset: usize,
        width: usize,
        context_width: usize,
    ) -> std::result::Result<Self, ContextReadError> {
        let chars: Vec<char> = text.chars().collect();
        let available = chars.len();
        let slice = |start: usize, len: usize| -> String {
            chars.iter().skip(start).take(len).collect()
        };

        let topic = slice(offset, width);
        let topic_len = topic.chars().count();
        if topic_len < width {
            return Err(ContextReadError::Topic { offset, width, available: topic_len });
        }

        let before_offset = offset.saturating_sub(context_width);
        let before_width = offset - before_offset;
        let before = slice(before_offset, before_width);
        let before_len = before.chars().count();
        if before_len < before_width {
            return Err(ContextReadError::Before {
                offset: before_offset,
                width: before_width,
                available: before_len,
            });
        }

        let after_offset = offset + width;
        let after = slice(after_offset, context_width);

        tracing::trace!(offset, width, context_width, available, "read context");

        Ok(Self {
            topic: Span::new(offset, topic),
            before: Span::new(before_offset, before),
            after: Span::new(after_offset, after),
            width: context_width,
        })
    }

    /// Char offset of the topic.
    pub fn offset(&self) -> usize {
        self.topic.offset
    }

    /// Char offset where `full_text` starts.
    pub fn start(&self) -> usize {
        self.before.offset
    }

    /// `before + topic + after`.
    pub fn full_text(&self) -> String {
        let mut text = String::with_capacity(
            self.before.text.len() + self.topic.text.len() + self.after.text.len(),
        );
        text.push_str(&self.before.text);
        text.push_str(&self.topic.text);
        text.push_str(&self.after.text);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_at_front_of_file() {
        let ctx = Context::from_text("text", 0, 4, 3).unwrap();
        assert_eq!(ctx.topic.text, "text");
        assert!(ctx.before.is_empty());
        assert!(ctx.after.is_empty());
        assert_eq!(ctx.after.offset, 4);
    }

    #[test]
    fn test_lines_around_topic() {
        let ctx = Context::from_text("a\nb\nc\nd\ne", 4, 2, 4).unwrap();
        assert_eq!(ctx.before, Span::new(0, "a\nb\n"));
        assert_eq!(ctx.topic, Span::new(4, "c\n"));
        assert_eq!(ctx.after, Span::new(6, "d\ne"));
        assert_eq!(ctx.full_text(), "a\nb\nc\nd\ne");
        assert_eq!(ctx.width, 4);
    }

    #[test]
    fn test_offsets_count_chars() {
        let ctx = Context::from_text("ééxyzé", 2, 2, 2).unwrap();
        assert_eq!(ctx.topic.text, "xy");
        assert_eq!(ctx.before.text, "éé");
        assert_eq!(ctx.after.text, "zé");
        assert_eq!(ctx.topic.len(), 2);
    }

    #[test]
    fn test_topic_too_wide() {
        let err = Context::from_text("abc", 1, 5, 2).unwrap_err();
        assert_eq!(err, ContextReadError::Topic { offset: 1, width: 5, available: 2 });
    }

    #[test]
    fn test_topic_past_end() {
        assert!(matches!(
            Context::from_text("abc", 10, 1, 2),
            Err(ContextReadError::Topic { .. })
        ));
    }

    #[test]
    fn test_before_unreadable() {
        // An empty topic past the end reads fine; its before text does not.
        let err = Context::from_text("abc", 10, 0, 2).unwrap_err();
        assert_eq!(err, ContextReadError::Before { offset: 8, width: 2, available: 0 });
    }

    #[test]
    fn test_zero_width_topic_at_end() {
        let ctx = Context::from_text("abc", 3, 0, 2).unwrap();
        assert_eq!(ctx.before.text, "bc");
        assert!(ctx.topic.is_empty());
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(2, "bb");
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(3));
        assert!(!span.contains(4));
    }
}
