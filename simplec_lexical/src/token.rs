//! Is a module containing the [`Token`] type and all of its related types.

use std::fmt::Display;

use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use strum_macros::IntoStaticStr;

use crate::table::KeywordKind;

/// Is an enumeration representing the two kinds of comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommentKind {
    /// A comment that starts with `//` and ends at the end of the line.
    Line,

    /// A comment that starts with `/*` and ends with `*/`.
    Block,
}

/// Is an enumeration of the lexical anomalies that are reported as [`TokenKind::Error`] tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// A `|`, `&` or `/` that isn't followed by a character it can pair with.
    InvalidSymbol,

    /// The input ended inside a string literal.
    UnterminatedString,

    /// The input ended inside a `/*` comment.
    UnterminatedBlockComment,
}

/// Is an enumeration of every kind of token the lexer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, IntoStaticStr)]
#[allow(missing_docs)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Keyword(KeywordKind),
    Comment(CommentKind),
    Error(ErrorKind),

    Semicolon,
    OpenBrace,
    CloseBrace,
    OpenParenthesis,
    CloseParenthesis,
    Comma,
    Plus,
    Minus,
    Multiply,

    /// Division operator, reserved for the parser. The lexer never produces it: a lone `/` is
    /// lexed as [`ErrorKind::InvalidSymbol`].
    Divide,

    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `!`
    Not,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `||`
    Or,
    /// `&&`
    And,
}

impl TokenKind {
    /// Gets the name of the kind as printed in token listings.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }
}

/// Represents a classified lexeme of the source code.
///
/// The `text` is the exact lexeme, except for string literals whose text is the content between
/// the quotes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, new)]
pub struct Token {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the zero-based line the token starts on.
    #[get_copy = "pub"]
    line: usize,

    /// Gets the text of the token.
    #[get = "pub"]
    text: String,
}

impl Token {
    /// Dissolves the token into its kind, line, and text.
    #[must_use]
    pub fn dissolve(self) -> (TokenKind, usize, String) { (self.kind, self.line, self.text) }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{},{}> at Line: {}",
            self.kind.name(),
            self.text,
            self.line
        )
    }
}
