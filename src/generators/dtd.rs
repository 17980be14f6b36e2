//! The DTD generator
//!
//! Renders a [`DocumentType`] back out as a single DTD document. This
//! is the reference generator: it exercises the whole rendering
//! pipeline (fragment loading, content-spec recursion, name-sorted
//! declaration groups, encoded file output) without any target-language
//! specifics.

use crate::error::Result;
use crate::fragments::{format_fragment, FragmentStore};
use crate::generators::Generator;
use crate::helpers::{join, to_character_references};
use crate::model::{
    Attribute, AttributeType, ContentModel, DefaultDecl, DocumentType, Entity, EntityValue,
    Notation, Occurs,
};
use crate::output::OutputTarget;
use std::sync::Arc;

/// One level of indentation in rendered attribute lists
const INDENT: &str = "    ";

/// Generates a `{vocabulary}.dtd` file from a document type
#[derive(Debug)]
pub struct DtdGenerator {
    fragments: Arc<FragmentStore>,
}

impl DtdGenerator {
    /// The generator id used for registry and fragment lookup
    pub const ID: &'static str = "dtd";

    /// Create a DTD generator drawing fragments from the given store
    pub fn new(fragments: Arc<FragmentStore>) -> Self {
        Self { fragments }
    }

    fn render_elements(&self, doctype: &DocumentType) -> Result<String> {
        let element_decl = self.fragments.get(Self::ID, "elementDecl")?;
        let attlist_decl = self.fragments.get(Self::ID, "attlistDecl")?;

        let mut out = String::new();
        for name in doctype.sorted_element_names() {
            let element = doctype.element(name)?;
            let spec = content_spec(&element.content);
            out.push_str(&format_fragment(&element_decl, &[name, &spec]));

            if let Ok(attlist) = doctype.attlist(name) {
                let lines: Vec<String> = attlist
                    .attributes
                    .iter()
                    .map(attribute_line)
                    .collect();
                let body = join("\n", &lines);
                out.push_str(&format_fragment(&attlist_decl, &[name, &body]));
            }
        }
        Ok(out)
    }

    fn render_entities(&self, doctype: &DocumentType) -> Result<String> {
        let entity_decl = self.fragments.get(Self::ID, "entityDecl")?;

        let mut out = String::new();
        for name in doctype.sorted_entity_names() {
            let entity = doctype.entity(name)?;
            let tail = entity_tail(entity)?;
            out.push_str(&format_fragment(&entity_decl, &[name, &tail]));
        }
        Ok(out)
    }

    fn render_notations(&self, doctype: &DocumentType) -> Result<String> {
        let notation_decl = self.fragments.get(Self::ID, "notationDecl")?;

        let mut out = String::new();
        for name in doctype.sorted_notation_names() {
            let notation = doctype.notation(name)?;
            let (keyword, tail) = notation_tail(notation);
            out.push_str(&format_fragment(&notation_decl, &[name, keyword, &tail]));
        }
        Ok(out)
    }
}

impl Generator for DtdGenerator {
    fn language(&self) -> &'static str {
        Self::ID
    }

    fn describe_language(&self) -> &'static str {
        "Document Type Definition output"
    }

    fn generate(
        &self,
        doctype: &DocumentType,
        target: &OutputTarget,
        vocabulary: &str,
    ) -> Result<()> {
        let path = target.resolve_file(&format!("{}.dtd", vocabulary))?;
        let dtd_file = self.fragments.get(Self::ID, "dtdFile")?;

        let elements = self.render_elements(doctype)?;
        let entities = self.render_entities(doctype)?;
        let notations = self.render_notations(doctype)?;

        let timestamp = chrono::Local::now().to_rfc2822();
        let document = format_fragment(
            &dtd_file,
            &[
                vocabulary,
                env!("CARGO_PKG_NAME"),
                &timestamp,
                &elements,
                &entities,
                &notations,
            ],
        );

        target.write(&path, &document)
    }
}

/// The occurrence suffix for a sequence group
fn occurs_suffix(occurs: &Occurs) -> &'static str {
    match (occurs.min, occurs.is_multiple()) {
        (0, false) => "?",
        (0, true) => "*",
        (_, true) => "+",
        (_, false) => "",
    }
}

/// Render a content model as DTD content-spec text
pub fn content_spec(model: &ContentModel) -> String {
    match model {
        ContentModel::Empty => "EMPTY".to_string(),
        ContentModel::Any => "ANY".to_string(),
        ContentModel::PCData => "#PCDATA".to_string(),
        ContentModel::ElementRef(name) => name.clone(),
        ContentModel::Sequence { children, occurs } => {
            let inner = join(", ", children.iter().map(content_spec));
            format!("({}){}", inner, occurs_suffix(occurs))
        }
        ContentModel::Alternative(children) => {
            let inner = join(" | ", children.iter().map(content_spec));
            format!("({})", inner)
        }
        ContentModel::Mixed(children) => {
            // The #PCDATA leaf is implicit in the rendered form, so only
            // the element alternatives contribute; a hand-built group
            // without the leading leaf renders the same way.
            let alternatives: Vec<String> = children
                .iter()
                .filter(|c| !matches!(c, ContentModel::PCData))
                .map(content_spec)
                .collect();
            if alternatives.is_empty() {
                "(#PCDATA)".to_string()
            } else {
                format!("(#PCDATA | {})*", join(" | ", &alternatives))
            }
        }
    }
}

/// Render one attribute definition line, indented two levels
fn attribute_line(attribute: &Attribute) -> String {
    let type_text = match &attribute.content_type {
        AttributeType::Notation(values) => format!("NOTATION ({})", join("|", values)),
        AttributeType::Enumeration(values) => format!("({})", join("|", values)),
        other => other
            .keyword()
            .unwrap_or_default()
            .to_string(),
    };
    let default_text = match &attribute.default {
        DefaultDecl::Required => "#REQUIRED".to_string(),
        DefaultDecl::Implied => "#IMPLIED".to_string(),
        DefaultDecl::Fixed(value) => format!("#FIXED \"{}\"", value),
        DefaultDecl::Value(value) => format!("\"{}\"", value),
    };
    format!(
        "{}{}{} {} {}",
        INDENT, INDENT, attribute.name, type_text, default_text
    )
}

/// Render the part of an entity declaration after the name
fn entity_tail(entity: &Entity) -> Result<String> {
    match &entity.value {
        EntityValue::Internal(text) => {
            Ok(format!("\"{}\"", to_character_references(text)?))
        }
        EntityValue::External { id, ndata } => {
            let mut tail = match (&id.public_id, &id.system_id) {
                (Some(public), Some(system)) => format!("PUBLIC \"{}\" \"{}\"", public, system),
                (None, Some(system)) => format!("SYSTEM \"{}\"", system),
                (Some(public), None) => format!("PUBLIC \"{}\"", public),
                // ExternalId constructors always set a part for entities.
                (None, None) => String::new(),
            };
            if let Some(notation) = ndata {
                tail.push_str(" NDATA ");
                tail.push_str(notation);
            }
            Ok(tail)
        }
    }
}

/// Render the keyword and identifier text of a notation declaration
fn notation_tail(notation: &Notation) -> (&'static str, String) {
    match (&notation.id.public_id, &notation.id.system_id) {
        (Some(public), Some(system)) => ("PUBLIC", format!("\"{}\" \"{}\"", public, system)),
        (Some(public), None) => ("PUBLIC", format!("\"{}\"", public)),
        // Notation construction guarantees at least one identifier.
        (_, system) => (
            "SYSTEM",
            format!("\"{}\"", system.as_deref().unwrap_or_default()),
        ),
    }
}
