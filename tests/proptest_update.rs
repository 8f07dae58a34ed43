//! Property-based tests for drift resolution.
//!
//! Texts are built from distinct characters so the anchored context occurs
//! exactly once and the best alignment is unambiguous.

use proptest::prelude::*;
use serde_json::json;
use spor::{update_from_text, Anchor};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Distinct-char text plus a non-empty topic inside it.
fn text_and_topic() -> impl Strategy<Value = (String, usize, usize, usize)> {
    Just(ALPHABET.chars().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_flat_map(|chars| {
            (2..chars.len()).prop_flat_map(move |len| {
                let text: String = chars[..len].iter().collect();
                (Just(text), 0..len)
                    .prop_flat_map(move |(text, offset)| {
                        (Just(text), Just(offset), 1..=len - offset, 0usize..6)
                    })
            })
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn unchanged_text_keeps_anchor((text, offset, width, cw) in text_and_topic()) {
        let anchor = Anchor::from_text("/f.txt", &text, offset, width, cw, json!(null)).unwrap();
        let updated = update_from_text(&anchor, &text).unwrap();
        prop_assert_eq!(&updated, &anchor);
        prop_assert_eq!(update_from_text(&updated, &text).unwrap(), updated);
    }

    #[test]
    fn prefix_insertion_shifts_offset(
        (text, offset, width, cw) in text_and_topic(),
        prefix in "[A-Z]{1,8}",
    ) {
        let anchor = Anchor::from_text("/f.txt", &text, offset, width, cw, json!(null)).unwrap();
        let edited = format!("{prefix}{text}");
        let updated = update_from_text(&anchor, &edited).unwrap();
        prop_assert_eq!(updated.offset(), offset + prefix.len());
        prop_assert_eq!(&updated.context().topic.text, &anchor.context().topic.text);
    }
}
