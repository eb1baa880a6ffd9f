use std::{collections::HashSet, str::FromStr};

use strum::IntoEnumIterator;

use super::{is_pair_starter, single_character, standalone, two_character, KeywordKind};
use crate::token::TokenKind;

#[test]
fn keyword_from_str() {
    for keyword in KeywordKind::iter() {
        assert_eq!(KeywordKind::from_str(keyword.as_str()), Ok(keyword));
    }

    assert!(KeywordKind::from_str("Int").is_err());
    assert!(KeywordKind::from_str("string").is_err());
    assert!(KeywordKind::from_str("").is_err());
}

#[test]
fn single_character_tokens_are_distinct() {
    let kinds: Vec<_> = ";{}(),+-*".chars().filter_map(single_character).collect();
    let distinct: HashSet<_> = kinds.iter().copied().collect();

    assert_eq!(kinds.len(), 9);
    assert_eq!(distinct.len(), 9);
    assert_eq!(single_character('/'), None);
    assert_eq!(single_character('='), None);
}

#[test]
fn two_character_operators_start_with_a_pair_starter() {
    for pair in ["==", "!=", "<=", ">=", "||", "&&"] {
        assert!(two_character(pair).is_some(), "{pair}");
        assert!(pair.chars().all(is_pair_starter), "{pair}");
    }

    assert_eq!(two_character("=!"), None);
    assert_eq!(two_character("//"), None);
}

#[test]
fn standalone_meanings() {
    assert_eq!(standalone('='), Some(TokenKind::Equal));
    assert_eq!(standalone('!'), Some(TokenKind::Not));
    assert_eq!(standalone('<'), Some(TokenKind::Less));
    assert_eq!(standalone('>'), Some(TokenKind::Greater));

    for character in ['|', '&', '/'] {
        assert!(is_pair_starter(character));
        assert_eq!(standalone(character), None);
    }
}
