//! Construction of a group from a set of generators.
//!
//! Construction runs in two steps. First, each generator is raised to successive powers until the
//! powers wrap around to the generator itself. The last power before the wrap is the identity of
//! the cyclic subgroup, and all generators must agree on it. Then the set of elements found so far
//! is closed under products by repeated passes over all pairs, in the manner of Bellman-Ford,
//! until a pass adds nothing new. The group axioms involving the identity and inverses are checked
//! for every element along the way. Associativity is assumed and never checked here; see
//! [`Group::is_associative`].

use std::collections::BTreeSet;

use algebra::GroupElement;
use serde::{Deserialize, Serialize};

use super::{Axiom, ConstructionError, Group};

/// Bounds on the work done while constructing a group.
///
/// Construction does not terminate on its own if the generators do not close up to a finite set,
/// e.g. `1` in the integers under addition. A bound on the number of elements turns this into a
/// [`ConstructionError::LimitExceeded`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// The maximum number of elements that may be discovered. `None` means unbounded.
    pub max_elements: Option<usize>,
}

impl Limits {
    pub const UNBOUNDED: Self = Self { max_elements: None };

    pub const fn bounded(max_elements: usize) -> Self {
        Self {
            max_elements: Some(max_elements),
        }
    }

    fn check(&self, len: usize) -> Result<(), ConstructionError> {
        match self.max_elements {
            Some(max_elements) if len > max_elements => {
                Err(ConstructionError::LimitExceeded { max_elements })
            }
            _ => Ok(()),
        }
    }
}

impl<E: GroupElement> Group<E> {
    /// Constructs the group generated by `generators`. Duplicate generators are ignored.
    ///
    /// Construction only succeeds if the following hold for the resulting set of elements:
    ///  - every generator has a cyclic subgroup, and these all have the same identity;
    ///  - the identity is a two-sided identity for every element;
    ///  - `x · x⁻¹` is the identity for every element.
    ///
    /// When there is a single generator, its cyclic subgroup is returned without further checks.
    ///
    /// This does not terminate if the generated set is infinite. Use [`Group::construct_with`] to
    /// bound the amount of work.
    pub fn construct(generators: impl IntoIterator<Item = E>) -> Result<Self, ConstructionError> {
        Self::construct_with(generators, &Limits::UNBOUNDED)
    }

    #[tracing::instrument(skip_all, fields(generators, order))]
    pub fn construct_with(
        generators: impl IntoIterator<Item = E>,
        limits: &Limits,
    ) -> Result<Self, ConstructionError> {
        let generators: BTreeSet<E> = generators.into_iter().collect();
        tracing::Span::current().record("generators", generators.len());

        let result = Self::construct_from_set(&generators, limits);
        match &result {
            Ok(group) => {
                tracing::Span::current().record("order", group.order());
                tracing::debug!(abelian = group.is_abelian(), "constructed group");
            }
            Err(err) => tracing::debug!(%err, "construction failed"),
        }
        result
    }

    fn construct_from_set(
        generators: &BTreeSet<E>,
        limits: &Limits,
    ) -> Result<Self, ConstructionError> {
        let mut elements = BTreeSet::new();
        let mut identity: Option<E> = None;

        for g in generators {
            let (powers, last) = powers(g, limits)?;
            let Some(e) = last else {
                // g · g == g, so g can only be the identity of the trivial group.
                if generators.len() == 1 {
                    return Ok(Self::trivial(g.clone()));
                }
                return Err(ConstructionError::AmbiguousIdentity);
            };
            if *identity.get_or_insert_with(|| e.clone()) != e {
                return Err(ConstructionError::IdentityMismatch);
            }
            elements.extend(powers);
            elements.insert(g.clone());
            limits.check(elements.len())?;
        }

        let Some(identity) = identity else {
            return Err(ConstructionError::NoGenerators);
        };

        if generators.len() == 1 {
            return Ok(Self {
                identity,
                abelian: true,
                elements,
            });
        }

        let abelian = saturate(&mut elements, &identity, limits)?;
        Ok(Self {
            identity,
            abelian,
            elements,
        })
    }
}

/// Returns the powers `g², g³, ...` of `g` that come before the powers return to `g`, together
/// with the last of them, which is the identity of the cyclic subgroup. The latter is `None` if
/// `g · g == g`.
fn powers<E: GroupElement>(
    g: &E,
    limits: &Limits,
) -> Result<(BTreeSet<E>, Option<E>), ConstructionError> {
    let mut powers = BTreeSet::new();
    let mut last = None;
    let mut power = g.compose(g);
    while power != *g {
        let next = g.compose(&power);
        // The sequence of powers is determined by its last term, so a repeat other than g means
        // it is stuck in a loop that g is not part of.
        if !powers.insert(power.clone()) {
            return Err(ConstructionError::NonReturningGenerator);
        }
        // Count g itself too.
        limits.check(powers.len() + 1)?;
        last = Some(power);
        power = next;
    }
    Ok((powers, last))
}

fn check_axioms<E: GroupElement>(x: &E, identity: &E) -> Result<(), ConstructionError> {
    if x.compose(&x.invert()) != *identity {
        return Err(ConstructionError::AxiomViolation(Axiom::Inverse));
    }
    if x.compose(identity) != *x {
        return Err(ConstructionError::AxiomViolation(Axiom::RightIdentity));
    }
    if identity.compose(x) != *x {
        return Err(ConstructionError::AxiomViolation(Axiom::LeftIdentity));
    }
    Ok(())
}

fn insert<E: Ord>(
    elements: &mut BTreeSet<E>,
    element: E,
    limits: &Limits,
) -> Result<bool, ConstructionError> {
    if !elements.insert(element) {
        return Ok(false);
    }
    limits.check(elements.len())?;
    Ok(true)
}

/// Adds products of pairs of elements to `elements` until a whole pass adds nothing. Returns
/// whether every pair of elements commutes.
///
/// Squares are included: a set can be closed under products of distinct elements without
/// containing `x · x`, e.g. `{0, 1, n - 1}` in the integers mod `n`. The last pass visits every
/// pair of the final set, so the return value is exact.
fn saturate<E: GroupElement>(
    elements: &mut BTreeSet<E>,
    identity: &E,
    limits: &Limits,
) -> Result<bool, ConstructionError> {
    let mut abelian = true;
    for pass in 1usize.. {
        // Elements found during a pass are visited in the next one.
        let snapshot: Vec<E> = elements.iter().cloned().collect();
        let mut augmented = false;

        for (i, x) in snapshot.iter().enumerate() {
            check_axioms(x, identity)?;
            if x == identity {
                continue;
            }
            for y in &snapshot[i..] {
                if y == identity {
                    continue;
                }
                let xy = x.compose(y);
                if y != x {
                    let yx = y.compose(x);
                    abelian &= xy == yx;
                    augmented |= insert(elements, yx, limits)?;
                }
                augmented |= insert(elements, xy, limits)?;
            }
        }

        tracing::debug!(pass, elements = elements.len(), abelian, "closure pass");
        if !augmented {
            break;
        }
    }
    Ok(abelian)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::{Additive, ModInt, Permutation};

    fn residue(value: u32, modulus: u32) -> Additive<ModInt> {
        Additive(ModInt::new(value, modulus))
    }

    #[test]
    fn powers_of_residue() {
        let (powers, last) = powers(&residue(2, 6), &Limits::UNBOUNDED).unwrap();
        assert_eq!(powers, [residue(4, 6), residue(0, 6)].into_iter().collect());
        assert_eq!(last, Some(residue(0, 6)));
    }

    #[test]
    fn powers_of_identity() {
        let (powers, last) = powers(&Permutation::identity(3), &Limits::UNBOUNDED).unwrap();
        assert!(powers.is_empty());
        assert_eq!(last, None);
    }

    #[test]
    fn powers_respect_limits() {
        assert_eq!(
            powers(&residue(1, 10), &Limits::bounded(9)),
            Err(ConstructionError::LimitExceeded { max_elements: 9 })
        );
        assert!(powers(&residue(1, 10), &Limits::bounded(10)).is_ok());
    }

    #[test]
    fn limits_serde() {
        let limits: Limits = serde_json::from_str(r#"{"max_elements": 30}"#).unwrap();
        assert_eq!(limits, Limits::bounded(30));
        assert_eq!(Limits::default(), Limits::UNBOUNDED);
    }

    #[test]
    fn axioms() {
        let e = residue(0, 4);
        assert!(check_axioms(&residue(3, 4), &e).is_ok());
        // 0 is not the identity for multiplication by units.
        assert_eq!(
            check_axioms(&residue(1, 4), &residue(1, 4)),
            Err(ConstructionError::AxiomViolation(Axiom::Inverse))
        );
    }

    #[test]
    fn saturate_is_exact_about_commutativity() {
        let identity = Permutation::identity(4);
        let mut elements: BTreeSet<_> = [
            identity.clone(),
            Permutation::from_cycle(4, &[0, 1]).unwrap(),
            Permutation::from_cycle(4, &[2, 3]).unwrap(),
        ]
        .into_iter()
        .collect();
        assert!(saturate(&mut elements, &identity, &Limits::UNBOUNDED).unwrap());
        assert_eq!(elements.len(), 4);

        elements.insert(Permutation::from_cycle(4, &[1, 2]).unwrap());
        assert!(!saturate(&mut elements, &identity, &Limits::UNBOUNDED).unwrap());
        assert_eq!(elements.len(), 24);
    }
}
