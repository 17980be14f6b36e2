//! Element content models
//!
//! A content model is the grammar describing the permitted child content
//! of an element: EMPTY, ANY, text, element references, and nested
//! sequence/choice/mixed groups with occurrence bounds.

use crate::error::{Error, Result};

/// Occurrence bounds for a content-model group (minOccurs, maxOccurs)
/// None for max means unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurs {
    /// Minimum number of occurrences
    pub min: u32,
    /// Maximum number of occurrences (None = unbounded)
    pub max: Option<u32>,
}

impl Occurs {
    /// Create new occurrence bounds; min must not exceed a bounded max
    pub fn new(min: u32, max: Option<u32>) -> Result<Self> {
        if let Some(max) = max {
            if min > max {
                return Err(Error::InvalidArgument(format!(
                    "minOccurs {} exceeds maxOccurs {}",
                    min, max
                )));
            }
        }
        Ok(Self { min, max })
    }

    /// Default occurrence (1, 1)
    pub fn once() -> Self {
        Self { min: 1, max: Some(1) }
    }

    /// Optional occurrence (0, 1)
    pub fn optional() -> Self {
        Self { min: 0, max: Some(1) }
    }

    /// Zero or more (0, unbounded)
    pub fn zero_or_more() -> Self {
        Self { min: 0, max: None }
    }

    /// One or more (1, unbounded)
    pub fn one_or_more() -> Self {
        Self { min: 1, max: None }
    }

    /// Check if the group may be absent (minOccurs == 0)
    pub fn is_emptiable(&self) -> bool {
        self.min == 0
    }

    /// Check if the group occurs at most once
    pub fn is_single(&self) -> bool {
        self.max == Some(1)
    }

    /// Check if the group may repeat (maxOccurs > 1 or unbounded)
    pub fn is_multiple(&self) -> bool {
        match self.max {
            Some(max) => max > 1,
            None => true,
        }
    }
}

impl Default for Occurs {
    fn default() -> Self {
        Self::once()
    }
}

/// The allowed content of an element, as a recursive tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentModel {
    /// No content at all (EMPTY)
    Empty,
    /// Unrestricted content (ANY)
    Any,
    /// Character data only (#PCDATA)
    PCData,
    /// A reference to another element by name
    ElementRef(String),
    /// An ordered group of children with occurrence bounds
    Sequence {
        /// The children, in grammar order (non-empty)
        children: Vec<ContentModel>,
        /// How often the whole group may occur
        occurs: Occurs,
    },
    /// A choice between children (non-empty)
    Alternative(Vec<ContentModel>),
    /// #PCDATA interleaved with zero or more alternatives, repeated as
    /// a whole; the first child is always [`ContentModel::PCData`]
    Mixed(Vec<ContentModel>),
}

impl ContentModel {
    /// Build a sequence group; children must be non-empty
    pub fn sequence(children: Vec<ContentModel>, occurs: Occurs) -> Result<Self> {
        if children.is_empty() {
            return Err(Error::InvalidArgument(
                "sequence content model has no children".to_string(),
            ));
        }
        Ok(ContentModel::Sequence { children, occurs })
    }

    /// Build a choice group; children must be non-empty
    pub fn alternative(children: Vec<ContentModel>) -> Result<Self> {
        if children.is_empty() {
            return Err(Error::InvalidArgument(
                "alternative content model has no children".to_string(),
            ));
        }
        Ok(ContentModel::Alternative(children))
    }

    /// Build a mixed group from the alternatives that accompany #PCDATA.
    ///
    /// The #PCDATA leaf is supplied implicitly as the first child;
    /// `alternatives` may be empty for a text-only mixed model.
    pub fn mixed(alternatives: Vec<ContentModel>) -> Self {
        let mut children = Vec::with_capacity(alternatives.len() + 1);
        children.push(ContentModel::PCData);
        children.extend(alternatives);
        ContentModel::Mixed(children)
    }

    /// Check if this node is a leaf (no nested groups)
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            ContentModel::Empty
                | ContentModel::Any
                | ContentModel::PCData
                | ContentModel::ElementRef(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurs_presets() {
        assert_eq!(Occurs::once(), Occurs::new(1, Some(1)).unwrap());
        assert_eq!(Occurs::optional(), Occurs::new(0, Some(1)).unwrap());
        assert_eq!(Occurs::zero_or_more(), Occurs::new(0, None).unwrap());
        assert_eq!(Occurs::one_or_more(), Occurs::new(1, None).unwrap());
        assert_eq!(Occurs::default(), Occurs::once());
    }

    #[test]
    fn test_occurs_rejects_inverted_bounds() {
        assert!(Occurs::new(2, Some(1)).is_err());
        assert!(Occurs::new(5, None).is_ok());
    }

    #[test]
    fn test_occurs_predicates() {
        assert!(Occurs::optional().is_emptiable());
        assert!(Occurs::optional().is_single());
        assert!(!Occurs::optional().is_multiple());

        assert!(Occurs::zero_or_more().is_multiple());
        assert!(!Occurs::once().is_multiple());
        assert!(Occurs::new(1, Some(4)).unwrap().is_multiple());
    }

    #[test]
    fn test_group_constructors_reject_empty_children() {
        assert!(ContentModel::sequence(vec![], Occurs::once()).is_err());
        assert!(ContentModel::alternative(vec![]).is_err());
    }

    #[test]
    fn test_mixed_prepends_pcdata() {
        let model = ContentModel::mixed(vec![ContentModel::ElementRef("a".into())]);
        match model {
            ContentModel::Mixed(children) => {
                assert_eq!(children[0], ContentModel::PCData);
                assert_eq!(children.len(), 2);
            }
            other => panic!("expected mixed model, got {:?}", other),
        }
    }

    #[test]
    fn test_is_leaf() {
        assert!(ContentModel::Empty.is_leaf());
        assert!(ContentModel::ElementRef("a".into()).is_leaf());
        let seq = ContentModel::sequence(vec![ContentModel::PCData], Occurs::once()).unwrap();
        assert!(!seq.is_leaf());
    }
}
