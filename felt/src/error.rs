//! Error types

use thiserror::Error;

/// Errors produced while parsing an override path such as `hero.ctas[0].label`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path string was empty.
    #[error("Override path is empty")]
    Empty,

    /// Two separators with nothing between them, or a leading/trailing dot.
    #[error("Empty segment at position {position} in path '{path}'")]
    EmptySegment {
        /// The full path being parsed.
        path: String,
        /// Index of the offending segment.
        position: usize,
    },

    /// A `[` without its matching `]`.
    #[error("Unclosed '[' in path '{0}'")]
    UnclosedBracket(String),

    /// Bracket contents that are neither an index nor a quoted key.
    #[error("Invalid index '{index}' in path '{path}'")]
    InvalidIndex {
        /// The full path being parsed.
        path: String,
        /// The bracket contents.
        index: String,
    },

    /// A bracketed index past the supported maximum.
    #[error("Index {index} in path '{path}' exceeds the maximum of {max}")]
    IndexTooLarge {
        /// The full path being parsed.
        path: String,
        /// The requested index.
        index: usize,
        /// The largest accepted index.
        max: usize,
    },
}

/// Errors that can occur when registering a layout override.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The override path could not be parsed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// The first path segment does not name a layout field.
    #[error("Unknown layout field '{0}'")]
    UnknownField(String),

    /// The override value could not be converted to JSON.
    #[error("Failed to serialize override value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Theme name is not one of the known brands.
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),

    /// Environment name is not one of the known deployments.
    #[error("Unknown environment '{0}'")]
    UnknownEnvironment(String),
}
