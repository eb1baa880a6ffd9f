//! Contains the command line front end: argument handling, input/output validation and the token
//! listing.

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

use std::{
    cell::RefCell,
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

pub use clap::Parser;
use simplec_base::{
    diagnostic::{Dummy, Handler},
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use simplec_lexical::{error, lexer::Lexer};
use thiserror::Error;

/// The input file compiled when none is given.
pub const DEFAULT_INPUT: &str = "TestProgramm";

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "simplec",
    about = "Tokenizes a program written in the Simple language."
)]
pub struct Argument {
    /// The source file to compile. Defaults to `TestProgramm`.
    pub input: Option<PathBuf>,

    /// The directory that receives the output. Defaults to the current directory.
    pub output: Option<PathBuf>,

    /// Positional arguments past the output directory; any of them is an error.
    #[clap(hide = true)]
    pub surplus: Vec<String>,

    /// Reports the characters that the lexer skips.
    #[clap(long = "warn-unknown")]
    pub warn_unknown: bool,

    /// Also writes the token listing to `<output>/<input file name>.tokens`.
    #[clap(long = "emit-tokens")]
    pub emit_tokens: bool,
}

/// Is an enumeration of the reasons the compilation stops before or while lexing.
#[derive(Debug, Error)]
pub enum Failure {
    /// More than two positional arguments were given.
    #[error("Too many arguments")]
    TooManyArguments,

    /// The input file doesn't exist.
    #[error("Input file not found")]
    InputNotFound(PathBuf),

    /// The input file exists but can't be loaded.
    #[error("{}: {source}", path.display())]
    Load {
        /// The path of the input file.
        path: PathBuf,

        /// The underlying error.
        source: source_file::Error,
    },

    /// The current directory is needed as the output directory but can't be determined.
    #[error("can't determine the current directory: {0}")]
    CurrentDirectory(#[source] std::io::Error),

    /// The token listing can't be written.
    #[error("{}: {source}", path.display())]
    Emit {
        /// The path of the listing file.
        path: PathBuf,

        /// The underlying error.
        source: std::io::Error,
    },

    /// The progress messages or the token listing can't be printed.
    #[error("can't print the output: {0}")]
    Print(#[source] std::io::Error),
}

impl Failure {
    /// Gets the process exit code reported for this failure.
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            // clap reports its own usage errors with 2
            Self::TooManyArguments => 3,
            Self::InputNotFound(..) => 4,
            Self::Load { .. } => 5,
            Self::CurrentDirectory(..) => 6,
            Self::Emit { .. } => 7,
            Self::Print(..) => 8,
        }
    }
}

/// The validated input and output locations of a compilation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Paths {
    /// The source file to compile.
    pub input: PathBuf,

    /// The directory that receives the output.
    pub output: PathBuf,

    /// The requested output directory, if it didn't exist and the current directory is used
    /// instead.
    pub missing_output: Option<PathBuf>,
}

impl Argument {
    /// Validates the arguments and fills in the defaults.
    ///
    /// # Errors
    /// - [`Failure::TooManyArguments`]: more than two positional arguments.
    /// - [`Failure::InputNotFound`]: the input file doesn't exist.
    /// - [`Failure::CurrentDirectory`]: the current directory is needed but unavailable.
    pub fn resolve(&self) -> Result<Paths, Failure> {
        if !self.surplus.is_empty() {
            return Err(Failure::TooManyArguments);
        }

        let input = self
            .input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        if !input.is_file() {
            return Err(Failure::InputNotFound(input));
        }

        let (output, missing_output) = match &self.output {
            Some(output) if output.is_dir() => (output.clone(), None),
            requested => (
                std::env::current_dir().map_err(Failure::CurrentDirectory)?,
                requested.clone(),
            ),
        };

        Ok(Paths {
            input,
            output,
            missing_output,
        })
    }
}

/// A [`Handler`] that prints every diagnostic to the error stream.
#[derive(Debug)]
struct Printer<'a, W> {
    sink: RefCell<&'a mut W>,
}

impl<'a, W: Write, E: Display> Handler<E> for Printer<'a, W> {
    fn receive(&self, diagnostic: E) {
        // a warning that can't be printed doesn't stop the compilation
        let _ = writeln!(self.sink.borrow_mut(), "{diagnostic}");
    }
}

fn listing_path(paths: &Paths) -> PathBuf {
    let mut name = paths
        .input
        .file_name()
        .map(ToOwned::to_owned)
        .unwrap_or_default();
    name.push(".tokens");

    paths.output.join(name)
}

fn create_listing(path: &Path) -> Result<BufWriter<File>, Failure> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| Failure::Emit {
            path: path.to_path_buf(),
            source,
        })
}

/// Lexes the input file named by the arguments, printing each token to `out` as soon as it is
/// produced. Warnings go to `err`.
///
/// # Errors
/// See [`Argument::resolve`]; additionally [`Failure::Load`] if the input can't be read,
/// [`Failure::Emit`] if the listing file can't be written and [`Failure::Print`] if `out` can't be
/// written.
pub fn compile(
    argument: &Argument,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), Failure> {
    let paths = argument.resolve()?;

    if paths.missing_output.is_some() {
        writeln!(
            err,
            "{}",
            Message::new(Severity::Warning, "Output directory does not exist")
        )
        .map_err(Failure::Print)?;
    }

    let source_file = SourceFile::open(&paths.input).map_err(|source| Failure::Load {
        path: paths.input.clone(),
        source,
    })?;

    let listing_path = listing_path(&paths);
    let mut listing = if argument.emit_tokens {
        Some(create_listing(&listing_path)?)
    } else {
        None
    };

    let printer = Printer {
        sink: RefCell::new(err),
    };
    let handler: &dyn Handler<error::Error> = if argument.warn_unknown {
        &printer
    } else {
        &Dummy
    };

    writeln!(out, "Starting compilation...").map_err(Failure::Print)?;

    for token in Lexer::new(&source_file, handler) {
        writeln!(out, "{token}").map_err(Failure::Print)?;

        if let Some(listing) = listing.as_mut() {
            writeln!(listing, "{token}").map_err(|source| Failure::Emit {
                path: listing_path.clone(),
                source,
            })?;
        }
    }

    if let Some(mut listing) = listing {
        listing.flush().map_err(|source| Failure::Emit {
            path: listing_path,
            source,
        })?;
    }

    writeln!(out, "Compiler finished").map_err(Failure::Print)?;
    out.flush().map_err(Failure::Print)
}

/// Runs the program with the given arguments on the standard output and error streams.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    match compile(argument, &mut out, &mut err) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            let _ = writeln!(err, "{}", Message::new(Severity::Error, &failure));
            ExitCode::from(failure.code())
        }
    }
}
