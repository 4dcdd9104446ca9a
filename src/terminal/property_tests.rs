//! Property-Based Tests for Terminal Module
//!
//! Uses proptest to check the decoder and line editor over arbitrary input.

use proptest::prelude::*;

use crate::terminal::{decode, EditOutcome, Key, LineEditor};

// == Strategies ==
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::ArrowUp),
        Just(Key::ArrowDown),
        Just(Key::ArrowLeft),
        Just(Key::ArrowRight),
        Just(Key::Backspace),
        Just(Key::Enter),
        (32u8..=126).prop_map(|b| Key::Printable(b as char)),
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}( [a-z]{1,8})?".prop_map(|s| s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Decoding never panics and single printable bytes decode to themselves.
    #[test]
    fn prop_decode_total(chunk in prop::collection::vec(any::<u8>(), 0..=3)) {
        let key = decode(&chunk);
        if let Some(&first) = chunk.first() {
            if (32..=126).contains(&first) {
                prop_assert_eq!(key, Key::Printable(first as char));
            }
        }
    }

    // Cursor and history index stay in range for any key sequence.
    #[test]
    fn prop_editor_invariants(
        history in prop::collection::vec(line_strategy(), 0..5),
        keys in prop::collection::vec(key_strategy(), 0..80),
    ) {
        let mut editor = LineEditor::with_history(history);
        for key in keys {
            let outcome = editor.handle(key);
            prop_assert!(editor.cursor() <= editor.buffer().len());
            prop_assert!(editor.history_index() <= editor.history().len());
            if let EditOutcome::Submit(line) = outcome {
                prop_assert!(!line.is_empty());
                prop_assert!(editor.is_live());
                prop_assert_eq!(editor.history().last(), Some(&line));
            }
        }
    }

    // Equal numbers of ArrowUp and ArrowDown presses from the live slot give
    // back the line that was being typed.
    #[test]
    fn prop_history_round_trip(
        history in prop::collection::vec(line_strategy(), 1..6),
        live in "[a-z ]{0,10}",
        steps in 1usize..6,
    ) {
        let steps = steps.min(history.len());
        let mut editor = LineEditor::with_history(history);
        editor.set_line(&live);

        for _ in 0..steps {
            editor.handle(Key::ArrowUp);
        }
        for _ in 0..steps {
            editor.handle(Key::ArrowDown);
        }

        prop_assert_eq!(editor.line(), live.clone());
        prop_assert_eq!(editor.cursor(), live.chars().count());
    }
}
