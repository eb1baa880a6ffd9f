//! Contains the [`Lexer`], the pull-based producer of [`Token`]s.

use std::{fmt::Debug, sync::Arc};

use getset::CopyGetters;
use simplec_base::{
    diagnostic::Handler,
    source_file::{self, ByteIndex, SourceFile, Span},
};

use crate::{
    error::{self, UnknownCharacter},
    state::State,
    token::Token,
};

/// Is an [`Iterator`] that tokenizes a source file on demand.
///
/// Every call to [`Iterator::next`] feeds characters to the [`State`] machine until a token is
/// complete or the input is exhausted, so the tokens are never buffered. Each character of the
/// source file is read exactly once.
///
/// Newlines advance the line counter, except the ones inside string literals and block comments,
/// which are part of the token's text.
#[derive(CopyGetters)]
pub struct Lexer<'a> {
    characters: source_file::Characters<'a>,
    state: State,

    /// Gets the zero-based line the lexer is currently on.
    #[get_copy = "pub"]
    line: usize,

    reprocess: Option<(ByteIndex, char)>,
    handler: &'a dyn Handler<error::Error>,
}

impl<'a> Debug for Lexer<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("source_file", self.characters.source_file().full_path())
            .field("state", &self.state)
            .field("line", &self.line)
            .field("reprocess", &self.reprocess)
            .finish_non_exhaustive()
    }
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of the given source file.
    ///
    /// Characters that can't start any token are skipped and reported to the `handler`.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>, handler: &'a dyn Handler<error::Error>) -> Self {
        Self {
            characters: source_file.iter(),
            state: State::Start,
            line: 0,
            reprocess: None,
            handler,
        }
    }

    /// Gets the state the lexer is currently in.
    #[must_use]
    pub fn state(&self) -> &State { &self.state }

    fn report_unknown(&self, index: ByteIndex, character: char) {
        let source_file = self.characters.source_file().clone();

        if let Some(span) = Span::new(source_file, index, index + character.len_utf8()) {
            self.handler
                .receive(error::Error::from(UnknownCharacter { span, character }));
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let Some((index, character)) = self.reprocess.take().or_else(|| self.characters.next())
            else {
                return std::mem::take(&mut self.state)
                    .flush()
                    .map(|lexeme| lexeme.into_token(self.line));
            };

            let line = self.line;
            let step = std::mem::take(&mut self.state).step(character);
            self.state = step.state;

            if step.reprocess {
                self.reprocess = Some((index, character));
            }

            if step.line_break {
                self.line += 1;
            }

            if step.skipped {
                self.report_unknown(index, character);
            }

            if let Some(lexeme) = step.lexeme {
                return Some(lexeme.into_token(line));
            }
        }
    }
}

impl<'a> std::iter::FusedIterator for Lexer<'a> {}
