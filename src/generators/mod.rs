//! Source and object generators
//!
//! A generator consumes a read-only [`DocumentType`] plus its code
//! fragments and renders output for one (language, API) target. The DTD
//! generator is the reference implementation; further targets plug into
//! the same trait and register in the [`registry::GeneratorRegistry`].

pub mod dtd;
pub mod registry;

pub use dtd::DtdGenerator;
pub use registry::GeneratorRegistry;

use crate::error::Result;
use crate::model::DocumentType;
use crate::output::OutputTarget;
use std::fmt;

/// A source or object generator for one (language, API) target
pub trait Generator: fmt::Debug {
    /// The target language identifier, e.g. `"dtd"`
    fn language(&self) -> &'static str;

    /// The API identifier, for generators tied to a parsing API
    fn api(&self) -> Option<&'static str> {
        None
    }

    /// Human-readable description of the target language
    fn describe_language(&self) -> &'static str;

    /// Human-readable description of the API; `None` for generators
    /// without one
    fn describe_api(&self) -> Option<&'static str> {
        None
    }

    /// Render the document type into the output target.
    ///
    /// `vocabulary` names the vocabulary and drives the output file
    /// name.
    fn generate(
        &self,
        doctype: &DocumentType,
        target: &OutputTarget,
        vocabulary: &str,
    ) -> Result<()>;
}
