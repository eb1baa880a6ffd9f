//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Painted};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = match self.severity {
            Severity::Error => Painted::plain("[error]:").color(Color::Red),
            Severity::Info => Painted::plain("[info]:").color(Color::Green),
            Severity::Warning => Painted::plain("[warning]:").color(Color::Yellow),
        };

        write!(
            f,
            "{} {}",
            header.bold(),
            Painted::plain(&self.display).bold()
        )
    }
}

/// Structure implementing [`Display`] that prints the line a span starts on and underlines the
/// spanned characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed under the underline.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let Some(location) = source_file.get_location(self.span.start()) else {
            return writeln!(f, "{}", source_file.full_path().display());
        };

        let line_number = location.line.to_string();
        let gutter = " ".repeat(line_number.len());
        let pipe = Painted::plain("|").color(Color::Cyan).bold();

        writeln!(
            f,
            "{gutter}{} {}:{}:{}",
            Painted::plain("-->").color(Color::Cyan).bold(),
            source_file.full_path().display(),
            location.line,
            location.column
        )?;
        writeln!(f, "{gutter} {pipe}")?;

        let line = source_file.get_line(location.line).unwrap_or_default();

        writeln!(
            f,
            "{} {pipe} {}",
            Painted::plain(&line_number).color(Color::Cyan).bold(),
            line.replace('\t', "    ")
        )?;

        // tabs are expanded above, so the padding has to follow them
        let padding: String = line
            .chars()
            .take(location.column - 1)
            .map(|character| if character == '\t' { "    " } else { " " })
            .collect();
        let width = self.span.str().chars().count().max(1);

        write!(
            f,
            "{gutter} {pipe} {padding}{}",
            Painted::plain("^".repeat(width)).color(Color::Red).bold()
        )?;

        if let Some(help) = &self.help_display {
            write!(f, " {}: {help}", Painted::plain("help").bold())?;
        }

        writeln!(f)
    }
}
