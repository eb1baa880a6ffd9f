//! Contains the ANSI escape sequences used to style console output.

use std::fmt::Display;

/// Represents a foreground color of the console text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Is a struct implementing [`Display`] that wraps a displayable object in a color and an
/// optional bold weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Painted<T> {
    /// The displayable object.
    pub display: T,

    /// The color applied to the object, if any.
    pub color: Option<Color>,

    /// Whether the object is printed in bold.
    pub bold: bool,
}

impl<T> Painted<T> {
    /// Wraps the displayable object without any styling.
    pub fn plain(display: T) -> Self {
        Self {
            display,
            color: None,
            bold: false,
        }
    }

    /// Applies the given color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Prints the object in bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.bold {
            f.write_str("\x1B[1m")?;
        }
        if let Some(color) = self.color {
            f.write_str(color.code())?;
        }

        write!(f, "{}", self.display)?;

        if self.bold || self.color.is_some() {
            f.write_str("\x1B[0m")?;
        }

        Ok(())
    }
}
