//! Error types for xmlmap

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn at(pos: Pos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not well-formed XML, or a typed leaf does not hold its type
    MalformedInput,
    MaxDepthExceeded {
        max: u16,
    },
    MaxSizeExceeded {
        max: usize,
    },
    /// A collection names an item type that cannot rebuild the member it was given
    UnknownCollectionItemType {
        collection: String,
        item_type: &'static str,
    },
    /// An item type refused the fragment handed to it
    ItemConstruction {
        item_type: &'static str,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => write!(f, "malformed xml"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
            Self::UnknownCollectionItemType {
                collection,
                item_type,
            } => write!(
                f,
                "collection `{collection}` declares item type `{item_type}` but holds a member it cannot construct from"
            ),
            Self::ItemConstruction { item_type } => {
                write!(f, "item type `{item_type}` rejected its xml fragment")
            }
        }
    }
}

/// Main error type for xmlmap
#[derive(Error, Clone, Debug, PartialEq)]
#[error("error at {}: {message}", span.start)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    /// Malformed-input error at a position
    pub fn malformed(pos: Pos, message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::MalformedInput, Span::at(pos), message)
    }

    pub fn unknown_item_type(collection: impl Into<String>, item_type: &'static str) -> Self {
        Self::new(
            ErrorKind::UnknownCollectionItemType {
                collection: collection.into(),
                item_type,
            },
            Span::empty(),
        )
    }

    /// For [`crate::FromXmlFragment`] implementations rejecting their input
    pub fn item_construction(item_type: &'static str, message: impl Into<String>) -> Self {
        Self::with_message(
            ErrorKind::ItemConstruction { item_type },
            Span::empty(),
            message,
        )
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type alias for xmlmap
pub type Result<T> = std::result::Result<T, Error>;
