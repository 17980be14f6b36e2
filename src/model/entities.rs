//! Entity and notation declarations
//!
//! Entities are either internal (literal replacement text) or external
//! (identified by a public and/or system id, optionally unparsed with an
//! NDATA notation). The enum shape guarantees an internal entity never
//! carries an external identifier.

use crate::error::{Error, Result};

/// A public and/or system identifier for external entities and notations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalId {
    /// The public identifier, if any
    pub public_id: Option<String>,
    /// The system identifier, if any
    pub system_id: Option<String>,
}

impl ExternalId {
    /// Identifier with both public and system parts
    pub fn public(public_id: impl Into<String>, system_id: impl Into<String>) -> Self {
        Self {
            public_id: Some(public_id.into()),
            system_id: Some(system_id.into()),
        }
    }

    /// Identifier with only a system part
    pub fn system(system_id: impl Into<String>) -> Self {
        Self {
            public_id: None,
            system_id: Some(system_id.into()),
        }
    }

    /// Check if neither identifier part is present
    pub fn is_empty(&self) -> bool {
        self.public_id.is_none() && self.system_id.is_none()
    }
}

/// The value side of an entity declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityValue {
    /// An internal entity with literal replacement text
    Internal(String),
    /// An external entity, unparsed when `ndata` names a notation
    External {
        /// Where the entity's content lives
        id: ExternalId,
        /// The NDATA notation name for unparsed entities
        ndata: Option<String>,
    },
}

/// An entity declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// The entity name
    pub name: String,
    /// Internal replacement text or external identifier
    pub value: EntityValue,
}

impl Entity {
    /// Declare an internal entity with literal replacement text
    pub fn internal(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: EntityValue::Internal(text.into()),
        }
    }

    /// Declare a parsed external entity
    pub fn external(name: impl Into<String>, id: ExternalId) -> Self {
        Self {
            name: name.into(),
            value: EntityValue::External { id, ndata: None },
        }
    }

    /// Declare an unparsed external entity with its NDATA notation
    pub fn unparsed(
        name: impl Into<String>,
        id: ExternalId,
        notation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: EntityValue::External {
                id,
                ndata: Some(notation.into()),
            },
        }
    }

    /// Check if this is an unparsed external entity
    pub fn is_unparsed(&self) -> bool {
        matches!(
            self.value,
            EntityValue::External { ndata: Some(_), .. }
        )
    }
}

/// A notation declaration; at least one identifier part is always present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notation {
    /// The notation name
    pub name: String,
    /// The public and/or system identifier
    pub id: ExternalId,
}

impl Notation {
    /// Declare a notation.
    ///
    /// Fails when both identifier parts are absent; downstream rendering
    /// relies on at least one being present.
    pub fn new(
        name: impl Into<String>,
        public_id: Option<String>,
        system_id: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        let id = ExternalId {
            public_id,
            system_id,
        };
        if id.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "notation '{}' has neither a public nor a system identifier",
                name
            )));
        }
        Ok(Self { name, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_entity_has_no_external_id() {
        let entity = Entity::internal("copy", "©");
        assert!(matches!(entity.value, EntityValue::Internal(_)));
        assert!(!entity.is_unparsed());
    }

    #[test]
    fn test_unparsed_entity() {
        let entity = Entity::unparsed("logo", ExternalId::system("logo.gif"), "gif");
        assert!(entity.is_unparsed());
        match entity.value {
            EntityValue::External { id, ndata } => {
                assert_eq!(id.system_id.as_deref(), Some("logo.gif"));
                assert_eq!(ndata.as_deref(), Some("gif"));
            }
            other => panic!("expected external entity, got {:?}", other),
        }
    }

    #[test]
    fn test_notation_requires_an_identifier() {
        assert!(Notation::new("gif", None, None).is_err());
        let n = Notation::new("gif", None, Some("image/gif".into())).unwrap();
        assert!(n.id.public_id.is_none());
        assert_eq!(n.id.system_id.as_deref(), Some("image/gif"));
    }

    #[test]
    fn test_external_id_constructors() {
        let both = ExternalId::public("-//W3C//DTD X//EN", "x.dtd");
        assert!(!both.is_empty());
        assert!(both.public_id.is_some() && both.system_id.is_some());

        let sys = ExternalId::system("x.dtd");
        assert!(sys.public_id.is_none());
    }
}
