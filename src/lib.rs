//! # xmlcodegen
//!
//! A schema-driven parser generator: given an in-memory description of
//! an XML vocabulary (as declared by a DTD or a W3C XML Schema), it
//! renders source code or other artifacts implementing a parser for
//! that vocabulary, one (target language, API) pair at a time.
//!
//! The crate owns the document type model, the schema type system, the
//! code fragment store, and the generator registry. Populating the
//! model from DTD or schema source text is the job of an external front
//! end.
//!
//! ## Example
//!
//! ```rust,ignore
//! use xmlcodegen::model::{ContentModel, DocumentType, ElementDecl, MarkupDecl};
//! use xmlcodegen::GeneratorOptions;
//!
//! let doctype = DocumentType::from_declarations(
//!     "memo",
//!     vec![MarkupDecl::Element(ElementDecl::new("memo", ContentModel::Any))],
//! )?;
//!
//! // Writes memo.dtd into the output directory.
//! xmlcodegen::generate_parser(&doctype, Some("out"), "dtd", None, &GeneratorOptions::new())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod helpers;

pub mod model;
pub mod types;

pub mod fragments;
pub mod options;
pub mod output;

pub mod generators;

// Re-exports for convenience
pub use error::{Error, Result};
pub use generators::{Generator, GeneratorRegistry};
pub use options::GeneratorOptions;
pub use output::{OutputEncoding, OutputTarget};

use std::collections::{BTreeMap, BTreeSet};

/// Version of the xmlcodegen library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate a parser (or other artifact) for a document type.
///
/// `language` selects the target language and `api` the parsing API,
/// where the target has one. `output_path`, when given, names an
/// existing directory the output is written into; otherwise output
/// lands in the current working directory. The output encoding is read
/// from the `output-encoding` option.
///
/// Fails with `InvalidArgument` when `language` is empty, and with
/// `NoSuchGenerator` when no generator is registered for the pair.
pub fn generate_parser(
    doctype: &model::DocumentType,
    output_path: Option<&str>,
    language: &str,
    api: Option<&str>,
    options: &GeneratorOptions,
) -> Result<()> {
    if language.is_empty() {
        return Err(Error::InvalidArgument(
            "no target language given".to_string(),
        ));
    }

    let registry = GeneratorRegistry::with_builtin_generators();
    let generator = registry
        .resolve(language, api)
        .ok_or_else(|| Error::NoSuchGenerator {
            language: language.to_string(),
            api: api.map(str::to_string),
        })?;

    let encoding = OutputEncoding::from_options(options)?;
    let target = match output_path {
        Some(dir) => OutputTarget::in_directory(dir),
        None => OutputTarget::new(),
    }
    .with_encoding(encoding);

    generator.generate(doctype, &target, doctype.name())
}

/// Every language a generator is registered for, with descriptions
pub fn list_available_languages() -> BTreeMap<String, String> {
    GeneratorRegistry::with_builtin_generators().languages()
}

/// Every API a generator is registered for, with descriptions
pub fn list_available_apis() -> BTreeMap<String, String> {
    GeneratorRegistry::with_builtin_generators().apis()
}

/// Every (language, API) pair a generator is registered for
pub fn list_available_language_api_pairs() -> BTreeSet<(String, Option<String>)> {
    GeneratorRegistry::with_builtin_generators().list_available()
}
