//! The schema type system
//!
//! W3C-schema simple and complex types as a closed hierarchy: atomic
//! leaf types, list types wrapping an item type, and union types over a
//! member set. Every type carries a name, a complexity flag, a set of
//! finality flags, and a facet set. Types are value objects: structural
//! equality and a total order are defined over all of their content,
//! and a deep copy is an ordinary `clone()`.

pub mod facets;

pub use facets::{Facet, Pattern, WhiteSpace};

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// One kind of type derivation that can be forbidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Finality {
    /// Derivation by restriction
    Restriction,
    /// Derivation by list
    List,
    /// Derivation by union
    Union,
    /// All derivation kinds at once
    All,
}

/// The set of derivation kinds forbidden from a type.
///
/// The empty set is the "none" state; `All` subsumes every other
/// member.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FinalitySet(BTreeSet<Finality>);

impl FinalitySet {
    /// The empty set: every derivation is allowed
    pub fn none() -> Self {
        Self::default()
    }

    /// The set forbidding every derivation
    pub fn all() -> Self {
        Self(BTreeSet::from([Finality::All]))
    }

    /// Build from individual flags
    pub fn from_flags(flags: impl IntoIterator<Item = Finality>) -> Self {
        Self(flags.into_iter().collect())
    }

    /// Check whether `aspect` is forbidden, directly or via `All`
    pub fn includes(&self, aspect: Finality) -> bool {
        self.0.contains(&Finality::All) || self.0.contains(&aspect)
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fields shared by every schema type
#[derive(Debug, Clone)]
pub struct TypeBase {
    /// The type name
    pub name: String,
    /// Whether the type is complex
    pub complex: bool,
    /// Forbidden derivation kinds
    pub finality: FinalitySet,
    /// Constraining facets, in insertion order
    pub facets: Vec<Facet>,
}

/// A schema type: atomic, list, or union
#[derive(Debug, Clone)]
pub enum SchemaType {
    /// A named leaf type
    Atomic(TypeBase),
    /// A list over one item type; complexity mirrors the item's
    List {
        /// Shared base fields
        base: TypeBase,
        /// The item type
        item: Box<SchemaType>,
    },
    /// A union over a non-empty member set; complex iff any member is
    Union {
        /// Shared base fields
        base: TypeBase,
        /// Member types, kept sorted for deterministic comparison
        members: Vec<SchemaType>,
    },
}

impl SchemaType {
    /// Construct an atomic type
    pub fn atomic(
        name: impl Into<String>,
        complex: bool,
        finality: FinalitySet,
        facets: Vec<Facet>,
    ) -> Self {
        SchemaType::Atomic(TypeBase {
            name: name.into(),
            complex,
            finality,
            facets,
        })
    }

    /// Construct a list type; complexity is derived from the item type
    pub fn list(
        name: impl Into<String>,
        finality: FinalitySet,
        facets: Vec<Facet>,
        item: SchemaType,
    ) -> Self {
        let complex = item.is_complex();
        SchemaType::List {
            base: TypeBase {
                name: name.into(),
                complex,
                finality,
                facets,
            },
            item: Box::new(item),
        }
    }

    /// Construct a union type over a non-empty member set.
    ///
    /// Members are sorted at construction; their order carries no
    /// semantic meaning beyond determinism. Fails with
    /// `InvalidArgument` when `members` is empty.
    pub fn union(
        name: impl Into<String>,
        finality: FinalitySet,
        facets: Vec<Facet>,
        mut members: Vec<SchemaType>,
    ) -> crate::error::Result<Self> {
        let name = name.into();
        if members.is_empty() {
            return Err(crate::error::Error::InvalidArgument(format!(
                "union type '{}' has no member types",
                name
            )));
        }
        members.sort();
        let complex = members.iter().any(SchemaType::is_complex);
        Ok(SchemaType::Union {
            base: TypeBase {
                name,
                complex,
                finality,
                facets,
            },
            members,
        })
    }

    fn base(&self) -> &TypeBase {
        match self {
            SchemaType::Atomic(base) => base,
            SchemaType::List { base, .. } => base,
            SchemaType::Union { base, .. } => base,
        }
    }

    fn base_mut(&mut self) -> &mut TypeBase {
        match self {
            SchemaType::Atomic(base) => base,
            SchemaType::List { base, .. } => base,
            SchemaType::Union { base, .. } => base,
        }
    }

    /// The type name
    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// Whether the type is complex
    pub fn is_complex(&self) -> bool {
        self.base().complex
    }

    /// Check whether derivation by `aspect` is forbidden
    pub fn is_final(&self, aspect: Finality) -> bool {
        self.base().finality.includes(aspect)
    }

    /// The held facets, in insertion order
    pub fn facets(&self) -> &[Facet] {
        &self.base().facets
    }

    /// Add a facet.
    ///
    /// Only legal before the type is published; once shared, types are
    /// treated as immutable by convention.
    pub fn add_facet(&mut self, facet: Facet) {
        self.base_mut().facets.push(facet);
    }

    /// Rank used as a tie-break between type varieties
    fn variety_rank(&self) -> u8 {
        match self {
            SchemaType::Atomic(_) => 0,
            SchemaType::List { .. } => 1,
            SchemaType::Union { .. } => 2,
        }
    }
}

/// Facet multisets compare as sorted sequences: two sets are equal iff
/// their elements compare equal pairwise after sorting.
fn cmp_facet_sets(a: &[Facet], b: &[Facet]) -> Ordering {
    let mut a: Vec<&Facet> = a.iter().collect();
    let mut b: Vec<&Facet> = b.iter().collect();
    a.sort();
    b.sort();
    a.cmp(&b)
}

fn cmp_bases(a: &TypeBase, b: &TypeBase) -> Ordering {
    a.name
        .cmp(&b.name)
        .then(a.complex.cmp(&b.complex))
        .then_with(|| a.finality.cmp(&b.finality))
        .then_with(|| cmp_facet_sets(&a.facets, &b.facets))
}

// Equality is defined through the total order so that the
// `cmp(a, b) == Equal ⇔ a == b` contract holds even when facet sets
// were populated in different orders.
impl PartialEq for SchemaType {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SchemaType {}

impl PartialOrd for SchemaType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SchemaType {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_bases(self.base(), other.base())
            .then_with(|| self.variety_rank().cmp(&other.variety_rank()))
            .then_with(|| match (self, other) {
                (SchemaType::List { item: a, .. }, SchemaType::List { item: b, .. }) => a.cmp(b),
                (
                    SchemaType::Union { members: a, .. },
                    SchemaType::Union { members: b, .. },
                ) => a.cmp(b),
                _ => Ordering::Equal,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn atom(name: &str) -> SchemaType {
        SchemaType::atomic(name, false, FinalitySet::none(), vec![])
    }

    #[test]
    fn test_finality_all_subsumes() {
        let all = FinalitySet::all();
        assert!(all.includes(Finality::Restriction));
        assert!(all.includes(Finality::List));
        assert!(all.includes(Finality::Union));

        let some = FinalitySet::from_flags([Finality::List]);
        assert!(some.includes(Finality::List));
        assert!(!some.includes(Finality::Union));

        assert!(FinalitySet::none().is_empty());
        assert!(!FinalitySet::none().includes(Finality::Restriction));
    }

    #[test]
    fn test_is_final_on_types() {
        let t = SchemaType::atomic(
            "token",
            false,
            FinalitySet::from_flags([Finality::Restriction]),
            vec![],
        );
        assert!(t.is_final(Finality::Restriction));
        assert!(!t.is_final(Finality::List));

        let sealed = SchemaType::atomic("sealed", false, FinalitySet::all(), vec![]);
        assert!(sealed.is_final(Finality::Union));
    }

    #[test]
    fn test_list_complexity_mirrors_item() {
        let simple = SchemaType::list("tokens", FinalitySet::none(), vec![], atom("token"));
        assert!(!simple.is_complex());

        let complex_item = SchemaType::atomic("para", true, FinalitySet::none(), vec![]);
        let complex = SchemaType::list("paras", FinalitySet::none(), vec![], complex_item);
        assert!(complex.is_complex());
    }

    #[test]
    fn test_union_complexity_is_any_member() {
        let members = vec![
            atom("a"),
            SchemaType::atomic("b", true, FinalitySet::none(), vec![]),
        ];
        let union = SchemaType::union("u", FinalitySet::none(), vec![], members).unwrap();
        assert!(union.is_complex());

        let simple = SchemaType::union("v", FinalitySet::none(), vec![], vec![atom("a")]).unwrap();
        assert!(!simple.is_complex());
    }

    #[test]
    fn test_union_rejects_empty_member_set() {
        assert!(SchemaType::union("u", FinalitySet::none(), vec![], vec![]).is_err());
    }

    #[test]
    fn test_union_member_order_is_canonical() {
        let u1 =
            SchemaType::union("u", FinalitySet::none(), vec![], vec![atom("a"), atom("b")]).unwrap();
        let u2 =
            SchemaType::union("u", FinalitySet::none(), vec![], vec![atom("b"), atom("a")]).unwrap();
        assert_eq!(u1, u2);
    }

    #[test]
    fn test_facet_sets_compare_sorted() {
        let mut t1 = atom("t");
        let mut t2 = atom("t");
        t1.add_facet(Facet::Enumeration("x".into()));
        t1.add_facet(Facet::Enumeration("y".into()));
        t2.add_facet(Facet::Enumeration("y".into()));
        t2.add_facet(Facet::Enumeration("x".into()));
        assert_eq!(t1.cmp(&t2), Ordering::Equal);
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_ordering_consistent_with_equality() {
        let samples = vec![
            atom("a"),
            atom("b"),
            SchemaType::atomic("a", true, FinalitySet::none(), vec![]),
            SchemaType::list("a", FinalitySet::none(), vec![], atom("x")),
            SchemaType::union("a", FinalitySet::none(), vec![], vec![atom("x")]).unwrap(),
            SchemaType::atomic(
                "a",
                false,
                FinalitySet::all(),
                vec![Facet::Length {
                    value: 2,
                    fixed: false,
                }],
            ),
        ];
        for a in &samples {
            for b in &samples {
                // compare == 0 exactly when equal, and antisymmetric
                assert_eq!(a.cmp(b) == Ordering::Equal, a == b);
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
                for c in &samples {
                    // transitivity over the sampled set
                    if a.cmp(b) != Ordering::Greater && b.cmp(c) != Ordering::Greater {
                        assert_ne!(a.cmp(c), Ordering::Greater);
                    }
                }
            }
        }
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let mut original = atom("t");
        original.add_facet(Facet::Enumeration("x".into()));

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.add_facet(Facet::Enumeration("y".into()));
        assert_ne!(copy, original);
        assert_eq!(original.facets().len(), 1);
    }
}
