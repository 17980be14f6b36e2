//! Constraining facets for schema simple types
//!
//! Facets restrict a simple type's value space: enumerated values,
//! length, digit counts, an inclusive upper bound, lexical patterns,
//! and white-space handling. Most facets carry a `fixed` flag meaning
//! derived types may not override the value.

use crate::error::{Error, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

/// White space handling modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WhiteSpace {
    /// Preserve all white space
    Preserve,
    /// Replace tabs and newlines with spaces
    Replace,
    /// Replace and collapse multiple spaces
    Collapse,
}

impl WhiteSpace {
    /// Parse from the schema attribute value
    pub fn from_keyword(s: &str) -> Result<Self> {
        match s {
            "preserve" => Ok(WhiteSpace::Preserve),
            "replace" => Ok(WhiteSpace::Replace),
            "collapse" => Ok(WhiteSpace::Collapse),
            _ => Err(Error::InvalidArgument(format!(
                "invalid whiteSpace value: '{}'. Must be 'preserve', 'replace', or 'collapse'",
                s
            ))),
        }
    }
}

impl fmt::Display for WhiteSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WhiteSpace::Preserve => "preserve",
            WhiteSpace::Replace => "replace",
            WhiteSpace::Collapse => "collapse",
        };
        f.write_str(s)
    }
}

/// A compiled lexical pattern with value semantics over its source text.
///
/// `regex::Regex` itself has no equality; comparing the source pattern
/// gives facet sets a total, deterministic order.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| Error::InvalidArgument(format!("invalid pattern '{}': {}", pattern, e)))?;
        Ok(Self { regex })
    }

    /// The source text of the pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Check if a value matches the pattern
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

/// One constraining facet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    /// One member of the type's enumerated value set
    Enumeration(String),
    /// Exact value length
    Length {
        /// The required length
        value: u32,
        /// Derived types may not override when true
        fixed: bool,
    },
    /// Maximum number of significant digits
    TotalDigits {
        /// The digit count
        value: u32,
        /// Derived types may not override when true
        fixed: bool,
    },
    /// Maximum number of fraction digits
    FractionDigits {
        /// The digit count
        value: u32,
        /// Derived types may not override when true
        fixed: bool,
    },
    /// Inclusive upper bound
    MaxInclusive {
        /// The bound
        value: i64,
        /// Derived types may not override when true
        fixed: bool,
    },
    /// A lexical pattern the value must match
    Pattern(Pattern),
    /// White space handling
    WhiteSpace {
        /// The handling mode
        mode: WhiteSpace,
        /// Derived types may not override when true
        fixed: bool,
    },
}

impl Facet {
    /// Rank used as the primary sort key across facet kinds
    fn kind_rank(&self) -> u8 {
        match self {
            Facet::Enumeration(_) => 0,
            Facet::Length { .. } => 1,
            Facet::TotalDigits { .. } => 2,
            Facet::FractionDigits { .. } => 3,
            Facet::MaxInclusive { .. } => 4,
            Facet::Pattern(_) => 5,
            Facet::WhiteSpace { .. } => 6,
        }
    }

    /// Check if derived types may not override this facet
    pub fn is_fixed(&self) -> bool {
        match self {
            Facet::Enumeration(_) | Facet::Pattern(_) => false,
            Facet::Length { fixed, .. }
            | Facet::TotalDigits { fixed, .. }
            | Facet::FractionDigits { fixed, .. }
            | Facet::MaxInclusive { fixed, .. }
            | Facet::WhiteSpace { fixed, .. } => *fixed,
        }
    }
}

impl PartialOrd for Facet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Facet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Facet::Enumeration(a), Facet::Enumeration(b)) => a.cmp(b),
            (
                Facet::Length { value: a, fixed: af },
                Facet::Length { value: b, fixed: bf },
            )
            | (
                Facet::TotalDigits { value: a, fixed: af },
                Facet::TotalDigits { value: b, fixed: bf },
            )
            | (
                Facet::FractionDigits { value: a, fixed: af },
                Facet::FractionDigits { value: b, fixed: bf },
            ) => a.cmp(b).then(af.cmp(bf)),
            (
                Facet::MaxInclusive { value: a, fixed: af },
                Facet::MaxInclusive { value: b, fixed: bf },
            ) => a.cmp(b).then(af.cmp(bf)),
            (Facet::Pattern(a), Facet::Pattern(b)) => a.cmp(b),
            (
                Facet::WhiteSpace { mode: a, fixed: af },
                Facet::WhiteSpace { mode: b, fixed: bf },
            ) => a.cmp(b).then(af.cmp(bf)),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}
