//! Contains the diagnostics the lexer reports besides the tokens it produces.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use simplec_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};

/// The source code contains a character that can't start any token; it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCharacter {
    /// The span of the skipped character.
    pub span: Span,

    /// The skipped character.
    pub character: char,
}

impl Display for UnknownCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Warning,
                format!("skipped unknown character {:?}", self.character)
            ),
            SourceCodeDisplay::new(&self.span, Some("this character doesn't start any token"))
        )
    }
}

/// Is an enumeration containing all kinds of lexical diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnknownCharacter(UnknownCharacter),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter(err) => write!(f, "{err}"),
        }
    }
}
