//! Error types for xmlcodegen
//!
//! This module defines all error types used throughout the library.
//! Every failure is reported synchronously to the immediate caller;
//! nothing in this crate retries on its own.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using xmlcodegen Error
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of a markup declaration, used to qualify lookup and
/// duplicate-name errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclarationKind {
    /// An element type declaration
    Element,
    /// An attribute-list declaration
    Attlist,
    /// An entity declaration
    Entity,
    /// A notation declaration
    Notation,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeclarationKind::Element => "element",
            DeclarationKind::Attlist => "attribute list",
            DeclarationKind::Entity => "entity",
            DeclarationKind::Notation => "notation",
        };
        f.write_str(s)
    }
}

/// Main error type for xmlcodegen operations
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied argument was missing or invalid
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A markup declaration was looked up by name but is not in the model
    #[error("no {kind} declaration named '{name}'")]
    NotFound {
        /// The declaration kind that was queried
        kind: DeclarationKind,
        /// The name that was not found
        name: String,
    },

    /// A markup declaration with the same name already exists in its kind
    #[error("duplicate {kind} declaration '{name}'")]
    DuplicateDeclaration {
        /// The declaration kind of the rejected addition
        kind: DeclarationKind,
        /// The already-present name
        name: String,
    },

    /// No generator is registered for the requested (language, API) pair
    #[error("no generator for language '{language}'{}", api_suffix(.api))]
    NoSuchGenerator {
        /// The requested target language
        language: String,
        /// The requested API, if any
        api: Option<String>,
    },

    /// The requested output directory does not exist
    #[error("output directory does not exist: {0}")]
    NoSuchDirectory(PathBuf),

    /// The code fragments for a generator could not be loaded
    #[error("cannot load code fragments for generator '{generator}': {reason}")]
    TemplateLoadFailed {
        /// The generator whose fragments were requested
        generator: String,
        /// What went wrong with the backing resource
        reason: String,
    },

    /// A named code fragment is missing from a generator's fragment set
    #[error("generator '{generator}' has no code fragment '{key}'")]
    TemplateNotFound {
        /// The generator whose fragments were consulted
        generator: String,
        /// The missing fragment key
        key: String,
    },

    /// An entity reference was opened with '&' but never closed with ';'
    #[error("malformed character reference in '{0}'")]
    MalformedReference(String),

    /// Writing generated output failed; carries the offending file when known
    #[error("cannot write output{}: {source}", path_suffix(.path))]
    OutputWriteFailed {
        /// The file being written, when known
        path: Option<PathBuf>,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

fn api_suffix(api: &Option<String>) -> String {
    match api {
        Some(api) => format!(" with API '{}'", api),
        None => String::new(),
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" to {}", path.display()),
        None => String::new(),
    }
}
