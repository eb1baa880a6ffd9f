//! Contains the static tables that drive the lexer: reserved words, single-character tokens and
//! the two-character operators.

use std::{collections::HashMap, str::FromStr};

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::token::TokenKind;

/// Is an enumeration of the reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    String,
    Boolean,
    Class,
    Do,
    Else,
    False,
    If,
    Int,
    Public,
    Return,
    Static,
    True,
    Void,
    Case,
    Switch,
    Default,
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|keyword| (keyword.as_str(), keyword)).collect();
        }

        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "boolean",
            Self::Class => "class",
            Self::Do => "do",
            Self::Else => "else",
            Self::False => "false",
            Self::If => "if",
            Self::Int => "int",
            Self::Public => "public",
            Self::Return => "return",
            Self::Static => "static",
            Self::True => "true",
            Self::Void => "void",
            Self::Case => "case",
            Self::Switch => "switch",
            Self::Default => "default",
        }
    }
}

lazy_static! {
    static ref SINGLE_CHARACTER_TOKENS: HashMap<char, TokenKind> = HashMap::from([
        (';', TokenKind::Semicolon),
        ('{', TokenKind::OpenBrace),
        ('}', TokenKind::CloseBrace),
        ('(', TokenKind::OpenParenthesis),
        (')', TokenKind::CloseParenthesis),
        (',', TokenKind::Comma),
        ('+', TokenKind::Plus),
        ('-', TokenKind::Minus),
        ('*', TokenKind::Multiply),
    ]);

    static ref TWO_CHARACTER_TOKENS: HashMap<&'static str, TokenKind> = HashMap::from([
        ("==", TokenKind::EqualEqual),
        ("!=", TokenKind::NotEqual),
        ("<=", TokenKind::LessEqual),
        (">=", TokenKind::GreaterEqual),
        ("||", TokenKind::Or),
        ("&&", TokenKind::And),
    ]);
}

/// Gets the kind of the token made of the given character alone, for characters that never start
/// a longer token.
#[must_use]
pub fn single_character(character: char) -> Option<TokenKind> {
    SINGLE_CHARACTER_TOKENS.get(&character).copied()
}

/// Gets the kind of the two-character operator spelled by `pair`.
#[must_use]
pub fn two_character(pair: &str) -> Option<TokenKind> { TWO_CHARACTER_TOKENS.get(pair).copied() }

/// Checks if the character may begin a two-character operator or a comment, in which case the
/// lexer has to see the next character before emitting anything.
#[must_use]
pub fn is_pair_starter(character: char) -> bool {
    matches!(character, '=' | '!' | '<' | '>' | '|' | '&' | '/')
}

/// Gets the meaning of a pair starter that isn't followed by a partner.
///
/// `|`, `&` and `/` have no meaning on their own.
#[must_use]
pub fn standalone(character: char) -> Option<TokenKind> {
    match character {
        '=' => Some(TokenKind::Equal),
        '!' => Some(TokenKind::Not),
        '<' => Some(TokenKind::Less),
        '>' => Some(TokenKind::Greater),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
