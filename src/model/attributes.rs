//! Attribute-list declarations
//!
//! This module models the attribute side of a DTD: per-element attribute
//! lists, the attribute content types, and default declarations. The
//! value-carrying rules (`#FIXED`/value defaults carry text, `#REQUIRED`/
//! `#IMPLIED` never do) are enforced by the enum shapes.

/// The content type of an attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    /// Unrestricted character data
    Cdata,
    /// A document-unique identifier
    Id,
    /// A reference to an ID elsewhere in the document
    Idref,
    /// Whitespace-separated ID references
    Idrefs,
    /// The name of an unparsed entity
    Entity,
    /// Whitespace-separated unparsed entity names
    Entities,
    /// A name token
    Nmtoken,
    /// Whitespace-separated name tokens
    Nmtokens,
    /// One value out of a fixed set
    Enumeration(Vec<String>),
    /// One notation name out of a fixed set
    Notation(Vec<String>),
}

impl AttributeType {
    /// The bare DTD keyword for non-enumerated types.
    ///
    /// Enumerated and notation types have no single keyword; their
    /// rendered form depends on the value list and is produced by the
    /// generator.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            AttributeType::Cdata => Some("CDATA"),
            AttributeType::Id => Some("ID"),
            AttributeType::Idref => Some("IDREF"),
            AttributeType::Idrefs => Some("IDREFS"),
            AttributeType::Entity => Some("ENTITY"),
            AttributeType::Entities => Some("ENTITIES"),
            AttributeType::Nmtoken => Some("NMTOKEN"),
            AttributeType::Nmtokens => Some("NMTOKENS"),
            AttributeType::Enumeration(_) | AttributeType::Notation(_) => None,
        }
    }
}

/// How the attribute's value is defaulted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultDecl {
    /// The attribute must be supplied in every instance
    Required,
    /// The attribute may be omitted with no default
    Implied,
    /// The attribute always has this value
    Fixed(String),
    /// The attribute defaults to this value when omitted
    Value(String),
}

/// One attribute definition within an attribute list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name
    pub name: String,
    /// The attribute's content type
    pub content_type: AttributeType,
    /// The default declaration
    pub default: DefaultDecl,
}

impl Attribute {
    /// Create a new attribute definition
    pub fn new(
        name: impl Into<String>,
        content_type: AttributeType,
        default: DefaultDecl,
    ) -> Self {
        Self {
            name: name.into(),
            content_type,
            default,
        }
    }
}

/// An attribute-list declaration for one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttlistDecl {
    /// The element the attributes belong to
    pub element_name: String,
    /// The attribute definitions, in declaration order
    pub attributes: Vec<Attribute>,
}

impl AttlistDecl {
    /// Create a new attribute-list declaration
    pub fn new(element_name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            element_name: element_name.into(),
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_construction() {
        let attr = Attribute::new("color", AttributeType::Cdata, DefaultDecl::Implied);
        assert_eq!(attr.name, "color");
        assert_eq!(attr.content_type, AttributeType::Cdata);
        assert_eq!(attr.default, DefaultDecl::Implied);
    }

    #[test]
    fn test_type_keywords() {
        assert_eq!(AttributeType::Cdata.keyword(), Some("CDATA"));
        assert_eq!(AttributeType::Nmtokens.keyword(), Some("NMTOKENS"));
        assert_eq!(AttributeType::Enumeration(vec!["a".into()]).keyword(), None);
        assert_eq!(AttributeType::Notation(vec!["n".into()]).keyword(), None);
    }

    #[test]
    fn test_value_carrying_defaults() {
        let fixed = DefaultDecl::Fixed("red".to_string());
        let value = DefaultDecl::Value("blue".to_string());
        assert_ne!(fixed, value);
        assert_eq!(fixed, DefaultDecl::Fixed("red".to_string()));
    }

    #[test]
    fn test_attlist_holds_declaration_order() {
        let decl = AttlistDecl::new(
            "shape",
            vec![
                Attribute::new("b", AttributeType::Cdata, DefaultDecl::Implied),
                Attribute::new("a", AttributeType::Id, DefaultDecl::Required),
            ],
        );
        assert_eq!(decl.attributes[0].name, "b");
        assert_eq!(decl.attributes[1].name, "a");
    }
}
