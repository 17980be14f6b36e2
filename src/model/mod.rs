//! The document type model
//!
//! In-memory representation of an XML vocabulary as declared by a DTD:
//! markup declarations (elements, attribute lists, entities, notations)
//! and the content-model trees describing permitted element content.
//! The model is populated by an external front end, optionally deep-
//! copied for transformation passes, and handed read-only to generators.

pub mod attributes;
pub mod content;
pub mod doctype;
pub mod entities;

pub use attributes::{AttlistDecl, Attribute, AttributeType, DefaultDecl};
pub use content::{ContentModel, Occurs};
pub use doctype::{DocumentType, ElementDecl, MarkupDecl};
pub use entities::{Entity, EntityValue, ExternalId, Notation};
