//! Finite groups enumerated from a set of generators.

use std::collections::BTreeSet;
use std::fmt;

use algebra::GroupElement;
use itertools::{iproduct, Itertools};
use serde::Serialize;

mod construct;
pub use construct::Limits;

mod error;
pub use error::{Axiom, ConstructionError};

/// A finite group, stored as the set of all its elements.
///
/// A `Group` can only be obtained through [`Group::construct`] (or [`Group::trivial`]), and is
/// never modified afterwards. The elements are iterated in the order given by the [`Ord`]
/// implementation of the element type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Group<E> {
    identity: E,
    abelian: bool,
    elements: BTreeSet<E>,
}

impl<E: GroupElement> Group<E> {
    /// The group whose only element is `identity`.
    pub fn trivial(identity: E) -> Self {
        Self {
            elements: std::iter::once(identity.clone()).collect(),
            identity,
            abelian: true,
        }
    }

    pub fn elements(&self) -> &BTreeSet<E> {
        &self.elements
    }

    pub fn identity(&self) -> &E {
        &self.identity
    }

    pub fn is_abelian(&self) -> bool {
        self.abelian
    }

    /// The number of elements of the group.
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, E> {
        self.elements.iter()
    }

    /// Checks that `(a · b) · c == a · (b · c)` for all triples of elements. This takes time cubic
    /// in the order of the group, and is not part of construction.
    pub fn is_associative(&self) -> bool {
        self.associativity_counterexample().is_none()
    }

    /// The first triple `(a, b, c)`, in lexicographic order, for which `(a · b) · c != a · (b · c)`.
    pub fn associativity_counterexample(&self) -> Option<(&E, &E, &E)> {
        iproduct!(self.iter(), self.iter(), self.iter())
            .find(|&(a, b, c)| a.compose(b).compose(c) != a.compose(&b.compose(c)))
    }
}

impl<'a, E> IntoIterator for &'a Group<E> {
    type Item = &'a E;
    type IntoIter = std::collections::btree_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E: fmt::Display> fmt::Display for Group<E> {
    /// Lists the elements, e.g. `abelian { 0, 1 }`. Non-abelian groups have no prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.abelian {
            write!(f, "abelian ")?;
        }
        write!(f, "{{ {} }}", self.elements.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::{Additive, ModInt, Permutation};
    use expect_test::expect;

    #[test]
    fn display() {
        let z4 = Group::construct([Additive(ModInt::new(1, 4))]).unwrap();
        expect![[r#"abelian { 0, 1, 2, 3 }"#]].assert_eq(&z4.to_string());

        let s3 = Group::construct(Permutation::symmetric_generators(3)).unwrap();
        expect![[r#"{ (), (1 2), (0 1), (0 1 2), (0 2 1), (0 2) }"#]].assert_eq(&s3.to_string());
    }

    #[test]
    fn serialize() {
        let z2 = Group::construct([Permutation::rotation(2)]).unwrap();
        expect![[r#"{"identity":[0,1],"abelian":true,"elements":[[0,1],[1,0]]}"#]]
            .assert_eq(&serde_json::to_string(&z2).unwrap());
    }

    #[test]
    fn trivial() {
        let group = Group::trivial(Permutation::identity(3));
        assert_eq!(group.order(), 1);
        assert!(group.is_abelian());
        assert!(group.is_associative());
        assert!(group.contains(&Permutation::identity(3)));
    }

    #[test]
    fn iteration_follows_element_order() {
        let group = Group::construct([Additive(ModInt::new(3, 7))]).unwrap();
        let values: Vec<u32> = group.iter().map(|x| x.0.value()).collect();
        assert_eq!(values, (0..7).collect::<Vec<_>>());
        assert_eq!((&group).into_iter().count(), 7);
    }
}
