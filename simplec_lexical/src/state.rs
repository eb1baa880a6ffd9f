//! Contains the lexer's state machine.
//!
//! The machine is driven one character at a time through [`State::step`], a pure function from
//! the current state and character to a [`Step`]. A step may emit at most one [`Lexeme`]; when a
//! character terminates a token without belonging to it, the step asks for the same character to
//! be fed again to the next state instead of recursing.

use derive_new::new;
use enum_as_inner::EnumAsInner;

use crate::{
    character::{self, CharacterKind},
    table::{self, KeywordKind},
    token::{CommentKind, ErrorKind, Token, TokenKind},
};

/// Is an enumeration of the states of the lexer. Each state carries the text accumulated since
/// it was entered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumAsInner)]
pub enum State {
    /// Between tokens. This is the initial state.
    #[default]
    Start,

    /// Inside an identifier or keyword.
    Identifier(String),

    /// Inside an integer literal.
    Number(String),

    /// Inside a string literal; holds the content without the opening quote.
    String(String),

    /// Inside a `//` comment; holds the text including the `//`.
    LineComment(String),

    /// Inside a `/*` comment; holds the text including the `/*`.
    BlockComment(String),

    /// Saw a character that may start a two-character operator or a comment.
    PendingSymbol(char),
}

/// Is a token that is not yet tied to a line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Lexeme {
    /// The kind of the token.
    pub kind: TokenKind,

    /// The text of the token.
    pub text: String,
}

impl Lexeme {
    /// Classifies a finished word as either a keyword or an identifier.
    #[must_use]
    pub fn word(text: String) -> Self {
        let kind = text
            .parse::<KeywordKind>()
            .map_or(TokenKind::Identifier, TokenKind::Keyword);

        Self { kind, text }
    }

    /// Gets the lexeme of a pair starter that turned out to stand alone.
    #[must_use]
    pub fn lone_symbol(symbol: char) -> Self {
        let kind =
            table::standalone(symbol).unwrap_or(TokenKind::Error(ErrorKind::InvalidSymbol));

        Self {
            kind,
            text: symbol.to_string(),
        }
    }

    /// Converts the lexeme into a [`Token`] on the given line.
    #[must_use]
    pub fn into_token(self, line: usize) -> Token { Token::new(self.kind, line, self.text) }
}

/// Is the result of feeding one character to a [`State`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step {
    /// The state to continue in.
    pub state: State,

    /// The lexeme completed by this step, if any.
    pub lexeme: Option<Lexeme>,

    /// The character was not consumed and has to be fed again to [`Step::state`].
    pub reprocess: bool,

    /// The character was a newline that counts as a line boundary.
    pub line_break: bool,

    /// The character has no meaning and was dropped.
    pub skipped: bool,
}

impl Step {
    fn to(state: State) -> Self {
        Self {
            state,
            lexeme: None,
            reprocess: false,
            line_break: false,
            skipped: false,
        }
    }

    fn emitting(mut self, lexeme: Lexeme) -> Self {
        self.lexeme = Some(lexeme);
        self
    }

    fn reprocessing(mut self) -> Self {
        self.reprocess = true;
        self
    }

    fn breaking_line(mut self) -> Self {
        self.line_break = true;
        self
    }

    fn skipping(mut self) -> Self {
        self.skipped = true;
        self
    }
}

fn extend(mut buffer: String, character: char) -> String {
    buffer.push(character);
    buffer
}

impl State {
    /// Feeds one character to the state.
    #[must_use]
    pub fn step(self, character: char) -> Step {
        match self {
            Self::Start => Self::start(character),

            Self::PendingSymbol(previous) => Self::pending_symbol(previous, character),

            Self::Identifier(buffer) => {
                if character::is_identifier_character(character) {
                    Step::to(Self::Identifier(extend(buffer, character)))
                } else {
                    Step::to(Self::Start)
                        .emitting(Lexeme::word(buffer))
                        .reprocessing()
                }
            }

            Self::Number(buffer) => {
                if character.is_ascii_digit() {
                    Step::to(Self::Number(extend(buffer, character)))
                } else {
                    Step::to(Self::Start)
                        .emitting(Lexeme::new(TokenKind::Number, buffer))
                        .reprocessing()
                }
            }

            Self::String(buffer) => {
                if character == '"' {
                    Step::to(Self::Start).emitting(Lexeme::new(TokenKind::String, buffer))
                } else {
                    Step::to(Self::String(extend(buffer, character)))
                }
            }

            Self::LineComment(mut buffer) => {
                if character == '\n' {
                    // crlf line endings
                    if buffer.ends_with('\r') {
                        buffer.pop();
                    }

                    Step::to(Self::Start)
                        .emitting(Lexeme::new(TokenKind::Comment(CommentKind::Line), buffer))
                        .breaking_line()
                } else {
                    Step::to(Self::LineComment(extend(buffer, character)))
                }
            }

            Self::BlockComment(buffer) => {
                let buffer = extend(buffer, character);

                // the `*` of the opening `/*` can't close the comment
                if buffer.len() >= 4 && buffer.ends_with("*/") {
                    Step::to(Self::Start)
                        .emitting(Lexeme::new(TokenKind::Comment(CommentKind::Block), buffer))
                } else {
                    Step::to(Self::BlockComment(buffer))
                }
            }
        }
    }

    fn start(character: char) -> Step {
        match character::classify(character) {
            CharacterKind::Whitespace if character == '\n' => Step::to(Self::Start).breaking_line(),
            CharacterKind::Whitespace => Step::to(Self::Start),
            CharacterKind::Letter => Step::to(Self::Identifier(character.to_string())),
            CharacterKind::Digit => Step::to(Self::Number(character.to_string())),
            CharacterKind::Symbol => Self::symbol(character),
            CharacterKind::Other => Step::to(Self::Start).skipping(),
        }
    }

    fn symbol(character: char) -> Step {
        if table::is_pair_starter(character) {
            Step::to(Self::PendingSymbol(character))
        } else if let Some(kind) = table::single_character(character) {
            Step::to(Self::Start).emitting(Lexeme::new(kind, character.to_string()))
        } else if character == '_' {
            Step::to(Self::Identifier(character.to_string()))
        } else if character == '"' {
            Step::to(Self::String(String::new()))
        } else {
            Step::to(Self::Start).skipping()
        }
    }

    fn pending_symbol(previous: char, character: char) -> Step {
        let pair: String = [previous, character].into_iter().collect();

        if let Some(kind) = table::two_character(&pair) {
            return Step::to(Self::Start).emitting(Lexeme::new(kind, pair));
        }

        match (previous, character) {
            ('/', '/') => Step::to(Self::LineComment(pair)),
            ('/', '*') => Step::to(Self::BlockComment(pair)),
            _ => Step::to(Self::Start)
                .emitting(Lexeme::lone_symbol(previous))
                .reprocessing(),
        }
    }

    /// Ends the state at the end of the input, producing the lexeme of whatever was accumulated.
    ///
    /// An unterminated string literal or block comment becomes an [`TokenKind::Error`] lexeme
    /// carrying the accumulated text.
    #[must_use]
    pub fn flush(self) -> Option<Lexeme> {
        match self {
            Self::Start => None,
            Self::Identifier(buffer) => Some(Lexeme::word(buffer)),
            Self::Number(buffer) => Some(Lexeme::new(TokenKind::Number, buffer)),
            Self::String(buffer) => Some(Lexeme::new(
                TokenKind::Error(ErrorKind::UnterminatedString),
                buffer,
            )),
            Self::LineComment(mut buffer) => {
                if buffer.ends_with('\r') {
                    buffer.pop();
                }

                Some(Lexeme::new(TokenKind::Comment(CommentKind::Line), buffer))
            }
            Self::BlockComment(buffer) => Some(Lexeme::new(
                TokenKind::Error(ErrorKind::UnterminatedBlockComment),
                buffer,
            )),
            Self::PendingSymbol(symbol) => Some(Lexeme::lone_symbol(symbol)),
        }
    }
}
