//! The document type aggregate
//!
//! A [`DocumentType`] owns four name-keyed maps of markup declarations
//! (elements, attribute lists, entities, notations). Names are unique
//! within each kind; insertion order is irrelevant because generators
//! emit declarations in name-sorted order. The model is append-then-
//! freeze: declarations can be added but never removed, and generators
//! receive the model read-only.

use crate::error::{DeclarationKind, Error, Result};
use crate::model::attributes::AttlistDecl;
use crate::model::content::ContentModel;
use crate::model::entities::{Entity, Notation};
use indexmap::IndexMap;

/// An element type declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDecl {
    /// The element name
    pub name: String,
    /// The element's content model
    pub content: ContentModel,
}

impl ElementDecl {
    /// Declare an element with its content model
    pub fn new(name: impl Into<String>, content: ContentModel) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// One markup declaration of any kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupDecl {
    /// An element type declaration
    Element(ElementDecl),
    /// An attribute-list declaration
    Attlist(AttlistDecl),
    /// An entity declaration
    Entity(Entity),
    /// A notation declaration
    Notation(Notation),
}

impl MarkupDecl {
    /// The declaration kind, for error reporting
    pub fn kind(&self) -> DeclarationKind {
        match self {
            MarkupDecl::Element(_) => DeclarationKind::Element,
            MarkupDecl::Attlist(_) => DeclarationKind::Attlist,
            MarkupDecl::Entity(_) => DeclarationKind::Entity,
            MarkupDecl::Notation(_) => DeclarationKind::Notation,
        }
    }

    /// The declared name within its kind
    pub fn name(&self) -> &str {
        match self {
            MarkupDecl::Element(e) => &e.name,
            MarkupDecl::Attlist(a) => &a.element_name,
            MarkupDecl::Entity(e) => &e.name,
            MarkupDecl::Notation(n) => &n.name,
        }
    }
}

/// A complete document type: the vocabulary name plus all of its markup
/// declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentType {
    /// The vocabulary name, used for the default output file name
    name: String,
    elements: IndexMap<String, ElementDecl>,
    attlists: IndexMap<String, AttlistDecl>,
    entities: IndexMap<String, Entity>,
    notations: IndexMap<String, Notation>,
}

impl DocumentType {
    /// Create an empty document type for the named vocabulary
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: IndexMap::new(),
            attlists: IndexMap::new(),
            entities: IndexMap::new(),
            notations: IndexMap::new(),
        }
    }

    /// Construct from a non-empty collection of markup declarations.
    ///
    /// Fails with `InvalidArgument` on an empty collection and with
    /// `DuplicateDeclaration` when a name repeats within its kind.
    pub fn from_declarations(
        name: impl Into<String>,
        declarations: impl IntoIterator<Item = MarkupDecl>,
    ) -> Result<Self> {
        let mut doctype = Self::new(name);
        let mut seen_any = false;
        for decl in declarations {
            seen_any = true;
            doctype.add_declaration(decl)?;
        }
        if !seen_any {
            return Err(Error::InvalidArgument(format!(
                "document type '{}' has no markup declarations",
                doctype.name
            )));
        }
        Ok(doctype)
    }

    /// The vocabulary name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add one markup declaration.
    ///
    /// Fails with `DuplicateDeclaration` when the name already exists
    /// within the declaration's kind; the model is left unchanged.
    pub fn add_declaration(&mut self, decl: MarkupDecl) -> Result<()> {
        let kind = decl.kind();
        let name = decl.name().to_string();
        let occupied = match &decl {
            MarkupDecl::Element(_) => self.elements.contains_key(&name),
            MarkupDecl::Attlist(_) => self.attlists.contains_key(&name),
            MarkupDecl::Entity(_) => self.entities.contains_key(&name),
            MarkupDecl::Notation(_) => self.notations.contains_key(&name),
        };
        if occupied {
            return Err(Error::DuplicateDeclaration { kind, name });
        }
        match decl {
            MarkupDecl::Element(e) => {
                self.elements.insert(name, e);
            }
            MarkupDecl::Attlist(a) => {
                self.attlists.insert(name, a);
            }
            MarkupDecl::Entity(e) => {
                self.entities.insert(name, e);
            }
            MarkupDecl::Notation(n) => {
                self.notations.insert(name, n);
            }
        }
        Ok(())
    }

    /// Look up an element declaration by name
    pub fn element(&self, name: &str) -> Result<&ElementDecl> {
        self.elements.get(name).ok_or_else(|| Error::NotFound {
            kind: DeclarationKind::Element,
            name: name.to_string(),
        })
    }

    /// Look up an attribute-list declaration by element name
    pub fn attlist(&self, name: &str) -> Result<&AttlistDecl> {
        self.attlists.get(name).ok_or_else(|| Error::NotFound {
            kind: DeclarationKind::Attlist,
            name: name.to_string(),
        })
    }

    /// Look up an entity declaration by name
    pub fn entity(&self, name: &str) -> Result<&Entity> {
        self.entities.get(name).ok_or_else(|| Error::NotFound {
            kind: DeclarationKind::Entity,
            name: name.to_string(),
        })
    }

    /// Look up a notation declaration by name
    pub fn notation(&self, name: &str) -> Result<&Notation> {
        self.notations.get(name).ok_or_else(|| Error::NotFound {
            kind: DeclarationKind::Notation,
            name: name.to_string(),
        })
    }

    /// Element names in byte-lexicographic order
    pub fn sorted_element_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.elements.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Entity names in byte-lexicographic order
    pub fn sorted_entity_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Notation names in byte-lexicographic order
    pub fn sorted_notation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.notations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of element declarations
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of entity declarations
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of notation declarations
    pub fn notation_count(&self) -> usize {
        self.notations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attributes::{Attribute, AttributeType, DefaultDecl};
    use pretty_assertions::assert_eq;

    fn sample_doctype() -> DocumentType {
        DocumentType::from_declarations(
            "sample",
            vec![
                MarkupDecl::Element(ElementDecl::new("root", ContentModel::Any)),
                MarkupDecl::Attlist(AttlistDecl::new(
                    "root",
                    vec![Attribute::new(
                        "id",
                        AttributeType::Id,
                        DefaultDecl::Required,
                    )],
                )),
                MarkupDecl::Entity(Entity::internal("copy", "©")),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_declarations_rejects_empty() {
        let err = DocumentType::from_declarations("empty", vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_lookup_by_name() {
        let doctype = sample_doctype();
        assert_eq!(doctype.element("root").unwrap().content, ContentModel::Any);
        assert_eq!(doctype.attlist("root").unwrap().attributes.len(), 1);
        assert!(doctype.entity("copy").is_ok());
        assert!(matches!(
            doctype.element("missing"),
            Err(Error::NotFound {
                kind: DeclarationKind::Element,
                ..
            })
        ));
    }

    #[test]
    fn test_add_one_declaration_of_each_kind() {
        let mut doctype = DocumentType::new("mixed");
        doctype
            .add_declaration(MarkupDecl::Element(ElementDecl::new(
                "root",
                ContentModel::Any,
            )))
            .unwrap();
        doctype
            .add_declaration(MarkupDecl::Attlist(AttlistDecl::new(
                "root",
                vec![Attribute::new(
                    "id",
                    AttributeType::Id,
                    DefaultDecl::Required,
                )],
            )))
            .unwrap();
        doctype
            .add_declaration(MarkupDecl::Entity(Entity::internal("copy", "©")))
            .unwrap();
        doctype
            .add_declaration(MarkupDecl::Notation(
                crate::model::Notation::new("gif", None, Some("image/gif".into())).unwrap(),
            ))
            .unwrap();

        assert!(doctype.element("root").is_ok());
        assert!(doctype.attlist("root").is_ok());
        assert!(doctype.entity("copy").is_ok());
        assert!(doctype.notation("gif").is_ok());
    }

    #[test]
    fn test_element_and_attlist_share_a_name_space_per_kind() {
        // An attlist for "root" does not collide with the element "root".
        let doctype = sample_doctype();
        assert!(doctype.element("root").is_ok());
        assert!(doctype.attlist("root").is_ok());
    }

    #[test]
    fn test_duplicate_declaration_leaves_model_unchanged() {
        let mut doctype = sample_doctype();
        let err = doctype
            .add_declaration(MarkupDecl::Element(ElementDecl::new(
                "root",
                ContentModel::Empty,
            )))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateDeclaration {
                kind: DeclarationKind::Element,
                ..
            }
        ));
        assert_eq!(doctype.element_count(), 1);
        assert_eq!(doctype.element("root").unwrap().content, ContentModel::Any);
    }

    #[test]
    fn test_sorted_names_ignore_insertion_order() {
        let mut doctype = sample_doctype();
        doctype
            .add_declaration(MarkupDecl::Element(ElementDecl::new(
                "alpha",
                ContentModel::Empty,
            )))
            .unwrap();
        assert_eq!(doctype.sorted_element_names(), vec!["alpha", "root"]);
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let doctype = sample_doctype();
        let mut copy = doctype.clone();
        copy.add_declaration(MarkupDecl::Entity(Entity::internal("tm", "™")))
            .unwrap();
        assert_eq!(doctype.entity_count(), 1);
        assert_eq!(copy.entity_count(), 2);
    }
}
