//! Error types for the VerseScope system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for VerseScope operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing attribute error.
    #[must_use]
    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        })
    }

    /// Creates an invalid number error for a chapter or verse identifier.
    #[must_use]
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber {
            field: field.into(),
            value: value.into(),
        })
    }

    /// Creates a malformed document error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedDocument(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Renders the error together with its context, if any.
    #[must_use]
    pub fn report(&self) -> String {
        match &self.context {
            Some(ctx) => format!("{self} {ctx}").trim_end().to_string(),
            None => self.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A structural element lacks its identifying attribute.
    #[error("missing attribute '{attribute}' on {element} element")]
    MissingAttribute {
        /// The structural level (book, chapter, verse).
        element: String,
        /// The attribute that was expected.
        attribute: String,
    },

    /// A chapter or verse identifier is not a positive integer.
    #[error("invalid {field} number: {value:?}")]
    InvalidNumber {
        /// The structural level (chapter, verse).
        field: String,
        /// The raw attribute text.
        value: String,
    },

    /// The source document is not well-formed.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The source document has no root element.
    #[error("document has no root element")]
    MissingRoot,

    /// Reading from or writing to the outside world failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
    /// Column number in source (1-indexed).
    pub column: Option<usize>,
    /// Enclosing document elements, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            column: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line, self.column) {
            (Some(source), Some(line), Some(col)) => write!(f, "at {source}:{line}:{col}")?,
            (Some(source), _, _) => write!(f, "at {source}")?,
            (None, Some(line), Some(col)) => write!(f, "at {line}:{col}")?,
            _ => {}
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
