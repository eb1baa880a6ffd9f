//! This crate implements the lexical analysis phase of the compiler. This phase is responsible
//! for turning the characters of a source file into a stream of tokens.
//!
//! The output of this phase is the [`lexer::Lexer`], an iterator producing one
//! [`token::Token`] at a time as the next phase asks for it.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod character;
pub mod error;
pub mod lexer;
pub mod state;
pub mod table;
pub mod token;
