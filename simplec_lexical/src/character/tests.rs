use proptest::{prop_assert_eq, proptest};

use super::{classify, is_identifier_character, CharacterKind};

#[test]
fn classify_ascii() {
    assert_eq!(classify(' '), CharacterKind::Whitespace);
    assert_eq!(classify('\t'), CharacterKind::Whitespace);
    assert_eq!(classify('\n'), CharacterKind::Whitespace);
    assert_eq!(classify('\r'), CharacterKind::Whitespace);
    assert_eq!(classify('a'), CharacterKind::Letter);
    assert_eq!(classify('Z'), CharacterKind::Letter);
    assert_eq!(classify('0'), CharacterKind::Digit);
    assert_eq!(classify('9'), CharacterKind::Digit);
    assert_eq!(classify('_'), CharacterKind::Symbol);
    assert_eq!(classify('"'), CharacterKind::Symbol);
    assert_eq!(classify('@'), CharacterKind::Symbol);
    assert_eq!(classify('\0'), CharacterKind::Other);
}

#[test]
fn classify_unicode() {
    assert_eq!(classify('é'), CharacterKind::Letter);
    assert_eq!(classify('ß'), CharacterKind::Letter);
    assert_eq!(classify('\u{a0}'), CharacterKind::Whitespace);
    assert_eq!(classify('٣'), CharacterKind::Other);
    assert_eq!(classify('€'), CharacterKind::Other);
}

#[test]
fn identifier_characters() {
    assert!(is_identifier_character('_'));
    assert!(is_identifier_character('x'));
    assert!(is_identifier_character('7'));
    assert!(!is_identifier_character('-'));
    assert!(!is_identifier_character(' '));
}

proptest! {
    #[test]
    fn whitespace_matches_std(character in proptest::char::any()) {
        prop_assert_eq!(
            classify(character) == CharacterKind::Whitespace,
            character.is_whitespace()
        );
    }

    #[test]
    fn ascii_digits_are_digits(digit in 0u32..10) {
        let character = char::from_digit(digit, 10).unwrap();
        prop_assert_eq!(classify(character), CharacterKind::Digit);
    }
}
