//! Contains the classification of single characters that the lexer dispatches on.

/// Is an enumeration of the categories a character can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterKind {
    /// Any whitespace, including the line terminators.
    Whitespace,

    /// An alphabetic character.
    Letter,

    /// An ASCII decimal digit.
    Digit,

    /// An ASCII punctuation character.
    Symbol,

    /// Control characters and non-ASCII punctuation or symbols.
    Other,
}

/// Classifies the given character.
#[must_use]
pub fn classify(character: char) -> CharacterKind {
    if character.is_whitespace() {
        CharacterKind::Whitespace
    } else if character.is_ascii_digit() {
        CharacterKind::Digit
    } else if character.is_alphabetic() {
        CharacterKind::Letter
    } else if character.is_ascii_punctuation() {
        CharacterKind::Symbol
    } else {
        CharacterKind::Other
    }
}

/// Checks if the character may continue an identifier.
#[must_use]
pub fn is_identifier_character(character: char) -> bool {
    character == '_' || matches!(classify(character), CharacterKind::Letter | CharacterKind::Digit)
}

#[cfg(test)]
mod tests;
