//! Property tests for the splitter: round-trip, size-or-atomicity, and
//! ordering must hold for any text and any bound.

use proptest::prelude::*;
use textsplit_core::{
    split_spans, split_text, verify, verify_atomicity, Preset, TextSplitter, TrimPolicy,
    DEFAULT_SEPARATORS, PUNCTUATION_SEPARATORS,
};

/// Text biased toward separator characters, with some multibyte chars.
fn prose() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-z]{1,12}",
            3 => Just(" ".to_string()),
            2 => Just(". ".to_string()),
            2 => Just("\n".to_string()),
            1 => Just("\n\n".to_string()),
            1 => Just(", ".to_string()),
            1 => "[äéß日本語🙂]{1,4}",
        ],
        0..60,
    )
    .prop_map(|parts| parts.concat())
}

/// Distinct, non-empty separators drawn from a small alphabet so they
/// overlap with each other and with the text, in any priority order.
fn separator_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[ab ,.\n]{1,3}", 0..5)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn round_trip_and_atomicity_any_separators(
        text in "[ab ,.\n]{0,80}",
        separators in separator_list(),
        max_chars in 1usize..=12,
    ) {
        let chunks = split_text(&text, &separators[..], max_chars);
        prop_assert_eq!(verify(&text, &chunks, &separators[..], max_chars), Ok(()));

        let splitter = TextSplitter::new(max_chars)
            .unwrap()
            .with_separators(separators.clone())
            .unwrap();
        prop_assert_eq!(splitter.split_str(&text), chunks);
    }

    #[test]
    fn round_trip_and_atomicity_default(text in prose(), max_chars in 1usize..=100) {
        let chunks = split_text(&text, DEFAULT_SEPARATORS, max_chars);
        prop_assert_eq!(chunks.concat(), text.clone());
        prop_assert_eq!(verify(&text, &chunks, DEFAULT_SEPARATORS, max_chars), Ok(()));
    }

    #[test]
    fn round_trip_and_atomicity_punctuation(text in prose(), max_chars in 1usize..=100) {
        let chunks = split_text(&text, PUNCTUATION_SEPARATORS, max_chars);
        prop_assert_eq!(verify(&text, &chunks, PUNCTUATION_SEPARATORS, max_chars), Ok(()));
    }

    #[test]
    fn arbitrary_unicode_round_trips(text in "\\PC{0,200}", max_chars in 1usize..=100) {
        let chunks = split_text(&text, DEFAULT_SEPARATORS, max_chars);
        prop_assert_eq!(verify(&text, &chunks, DEFAULT_SEPARATORS, max_chars), Ok(()));
    }

    #[test]
    fn pathological_repeated_separators(
        sep in prop::sample::select(vec!["\n\n", "\n", ". ", " "]),
        repeat in 0usize..50,
        max_chars in 1usize..=10,
    ) {
        let text = sep.repeat(repeat);
        let chunks = split_text(&text, DEFAULT_SEPARATORS, max_chars);
        prop_assert_eq!(verify(&text, &chunks, DEFAULT_SEPARATORS, max_chars), Ok(()));
    }

    #[test]
    fn spans_are_ordered_and_contiguous(text in prose(), max_chars in 1usize..=100) {
        let spans = split_spans(&text, DEFAULT_SEPARATORS, max_chars);
        let mut expected = 0;
        for span in &spans {
            prop_assert_eq!(span.start, expected);
            prop_assert!(span.end > span.start);
            expected = span.end;
        }
        prop_assert_eq!(expected, text.len());
    }

    #[test]
    fn trimmed_chunks_keep_size_bound(text in prose(), max_chars in 1usize..=100) {
        let splitter = TextSplitter::new(max_chars)
            .unwrap()
            .with_preset(Preset::Prose)
            .with_trim(TrimPolicy::Trim);
        let chunks = splitter.split(&text);
        prop_assert_eq!(verify_atomicity(&chunks, DEFAULT_SEPARATORS, max_chars), Ok(()));
        for (i, c) in chunks.iter().enumerate() {
            prop_assert_eq!(c.index, i);
            prop_assert!(!c.text.is_empty());
            prop_assert_eq!(c.text.trim(), c.text.as_str());
            prop_assert_eq!(&text[c.start..c.end], c.text.as_str());
        }
    }

    #[test]
    fn deterministic(text in prose(), max_chars in 1usize..=100) {
        let a = split_text(&text, DEFAULT_SEPARATORS, max_chars);
        let b = split_text(&text, DEFAULT_SEPARATORS, max_chars);
        prop_assert_eq!(a, b);
    }
}

#[test]
fn no_comma_returns_whole_text() {
    for text in ["HelloWorld", "a much longer sentence without the separator", "日本語"] {
        assert_eq!(split_text(text, &[","], 3), vec![text]);
    }
}

#[test]
fn literal_scenarios() {
    assert_eq!(
        split_text("Hello\n\nWorld\nHow are you?", DEFAULT_SEPARATORS, 12),
        vec!["Hello\n\n", "World\n", "How are you?"]
    );
    assert_eq!(
        split_text("apple,banana;cherry", &[",", ";"], 12),
        vec!["apple,", "banana;", "cherry"]
    );
    for max_chars in [1, 5, 10, 100, 10_000] {
        assert_eq!(split_text("HelloWorld", &[","], max_chars), vec!["HelloWorld"]);
    }
}

#[test]
fn splits_independently_across_threads() {
    let text = "One two three. Four five six.\n\nSeven eight nine ten.\n".repeat(50);
    let expected = split_text(&text, DEFAULT_SEPARATORS, 40);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let text = text.clone();
            std::thread::spawn(move || {
                split_text(&text, DEFAULT_SEPARATORS, 40)
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
