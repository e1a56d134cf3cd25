//! Property-based tests for key classification and square parsing.

use boardkeys_core::{File, KeyStroke, Modifiers, Rank, Square, Token};
use proptest::prelude::*;

fn arb_square() -> impl Strategy<Value = Square> {
    (prop::sample::select(File::ALL.to_vec()), prop::sample::select(Rank::ALL.to_vec()))
        .prop_map(|(file, rank)| Square::new(file, rank))
}

proptest! {
    #[test]
    fn prop_square_display_parses_back(square in arb_square()) {
        let parsed: Square = square.to_string().parse().expect("displayed square parses");
        prop_assert_eq!(parsed, square);
    }

    #[test]
    fn prop_lookup_key_is_two_digits(square in arb_square()) {
        let key = square.lookup_key();
        prop_assert_eq!(key.len(), 2);
        prop_assert!(key.chars().all(|c| ('1'..='8').contains(&c)));
    }

    #[test]
    fn prop_malformed_squares_rejected(s in "[a-z0-9]{0,4}") {
        let valid = s.len() == 2
            && (b'a'..=b'h').contains(&s.as_bytes()[0])
            && (b'1'..=b'8').contains(&s.as_bytes()[1]);
        prop_assert_eq!(s.parse::<Square>().is_ok(), valid);
    }

    #[test]
    fn prop_code_wins_over_layout(file in prop::sample::select(File::ALL.to_vec()), key in "[^a-h]") {
        // Non-US layouts report a different character for the same physical key
        let code = format!("Key{}", file.as_char().to_ascii_uppercase());
        let stroke = KeyStroke::new(code, key, Modifiers::NONE);
        prop_assert_eq!(stroke.token(), Token::File(file));
    }

    #[test]
    fn prop_literal_fallback_without_code(rank in prop::sample::select(Rank::ALL.to_vec())) {
        let stroke = KeyStroke::new("", rank.as_char().to_string(), Modifiers::NONE);
        prop_assert_eq!(stroke.token(), Token::Rank(rank));
    }

    #[test]
    fn prop_chord_needs_command_modifier(shift in any::<bool>(), alt in any::<bool>()) {
        let plain = Modifiers { ctrl: false, meta: false, shift, alt };
        prop_assert_eq!(KeyStroke::new("KeyZ", "z", plain).command_chord(), None);

        let ctrl = Modifiers { ctrl: true, ..plain };
        let meta = Modifiers { meta: true, ..plain };
        prop_assert_eq!(KeyStroke::new("KeyZ", "z", ctrl).command_chord(), Some(Token::Undo));
        prop_assert_eq!(KeyStroke::new("KeyY", "y", meta).command_chord(), Some(Token::Redo));
    }
}

#[test]
fn every_square_has_a_unique_lookup_key() {
    let mut keys: Vec<String> = Square::all().map(Square::lookup_key).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 64);
}
