//! Contains the [`SourceFile`] the lexer reads from and the [`Span`]s pointing into it.
//!
//! The file is memory-mapped rather than read into a buffer; its characters are handed out once,
//! in order, through [`Characters`].

use std::{
    fmt::{Debug, Display},
    fs::File,
    path::{Path, PathBuf},
    str::CharIndices,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use memmap::Mmap;
use ouroboros::self_referencing;
use thiserror::Error;

/// Is an enumeration of the reasons a [`SourceFile`] can't be loaded.
#[derive(Debug, Error)]
pub enum Error {
    /// The file can't be opened, written or mapped.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The file content isn't valid UTF-8.
    #[error("the file is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

#[self_referencing]
struct Mapping {
    // empty files can't be mapped
    map: Option<Mmap>,

    #[borrows(map)]
    text: &'this str,
}

impl Mapping {
    fn of(file: &File) -> Result<Self, Error> {
        let map = if file.metadata()?.len() > 0 {
            Some(unsafe { Mmap::map(file)? })
        } else {
            None
        };

        MappingTryBuilder {
            map,
            text_builder: |map| {
                map.as_ref()
                    .map_or(Ok(""), |map| std::str::from_utf8(map).map_err(Error::from))
            },
        }
        .try_build()
    }
}

/// Represents a source file handed to the lexer.
///
/// The content stays mapped while any [`Arc<SourceFile>`] is alive.
#[derive(Getters)]
pub struct SourceFile {
    mapping: Mapping,

    /// Gets the path the source file was loaded from.
    #[get = "pub"]
    full_path: PathBuf,

    line_starts: Vec<ByteIndex>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.line_starts.len())
            .finish_non_exhaustive()
    }
}

impl SourceFile {
    fn text(&self) -> &str { self.mapping.borrow_text() }

    /// Loads the source file from an already opened file.
    ///
    /// # Errors
    /// - [`Error::Io`]: the file can't be mapped to memory.
    /// - [`Error::Encoding`]: the file is not valid UTF-8.
    pub fn load(file: &File, full_path: PathBuf) -> Result<Arc<Self>, Error> {
        let mapping = Mapping::of(file)?;
        let line_starts = line_starts(mapping.borrow_text());

        Ok(Arc::new(Self {
            mapping,
            full_path,
            line_starts,
        }))
    }

    /// Opens and loads the source file at the given path.
    ///
    /// # Errors
    /// See [`SourceFile::load`]; additionally [`Error::Io`] if the file can't be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Arc<Self>, Error> {
        let path = path.as_ref();
        Self::load(&File::open(path)?, path.to_path_buf())
    }

    /// Writes the displayed value to a fresh temporary file and loads it.
    ///
    /// # Errors
    /// See [`SourceFile::load`]; additionally [`Error::Io`] if the temporary file can't be
    /// created or written.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut file = tempfile::Builder::new()
            .prefix("simplec")
            .suffix(".sc")
            .tempfile()?;
        write!(file, "{display}")?;
        file.flush()?;

        Self::load(file.as_file(), file.path().to_path_buf())
    }

    /// Gets the characters of the source file, each paired with its byte index.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> Characters<'a> {
        Characters {
            source_file: self,
            inner: self.text().char_indices(),
        }
    }

    /// Gets the zero-based line number `line` without its line terminator.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.text().len(), |next| next - 1);

        let text = &self.text()[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Gets the [`Location`] of the character starting at the given byte index.
    ///
    /// Only `\n` starts a new line, the same rule the lexer counts lines by.
    #[must_use]
    pub fn get_location(&self, index: ByteIndex) -> Option<Location> {
        let text = self.text();
        if !text.is_char_boundary(index) {
            return None;
        }

        let line = self.line_starts.partition_point(|start| *start <= index) - 1;
        let column = text[self.line_starts[line]..index].chars().count() + 1;

        Some(Location { line, column })
    }
}

fn line_starts(text: &str) -> Vec<ByteIndex> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(index, _)| index + 1))
        .collect()
}

/// Is a position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The zero-based line, numbered like the lines of tokens.
    pub line: usize,

    /// The one-based column, counted in characters.
    pub column: usize,
}

/// Represents a range of characters in a source file.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the byte index of the first character.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the byte index past the last character.
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file the span points into.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Span {
    /// Creates a span over `start..end` of the source file.
    ///
    /// Returns [`None`] if the range is reversed, out of bounds or splits a character.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        source_file.text().get(start..end)?;

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Gets the source text the span covers.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.text()[self.start..self.end] }

    /// Gets the [`Location`] of the first character of the span.
    #[must_use]
    pub fn start_location(&self) -> Option<Location> { self.source_file.get_location(self.start) }
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("range", &(self.start..self.end))
            .field("text", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && (self.start, self.end) == (other.start, other.end)
    }
}

impl Eq for Span {}

/// Is the forward-only sequence of the characters of a source file.
///
/// Every character is yielded exactly once and the sequence can't be restarted; create a new one
/// with [`SourceFile::iter`] instead.
#[derive(Debug, CopyGetters)]
pub struct Characters<'a> {
    /// Gets the source file the characters come from.
    #[get_copy = "pub"]
    source_file: &'a Arc<SourceFile>,

    inner: CharIndices<'a>,
}

impl<'a> Iterator for Characters<'a> {
    type Item = (ByteIndex, char);

    fn next(&mut self) -> Option<Self::Item> { self.inner.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<'a> std::iter::FusedIterator for Characters<'a> {}
