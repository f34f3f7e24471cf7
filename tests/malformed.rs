//! Element types that are not groups, and the ways construction notices.

use algebra::{Additive, ModInt, Permutation};
use expect_test::expect;
use groups::{Axiom, ConstructionError, Group, GroupElement, Limits};

/// An element of a finite magma given by its multiplication table.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct Cayley {
    x: u8,
    table: &'static [&'static [u8]],
    inverses: &'static [u8],
}

impl Cayley {
    fn all(table: &'static [&'static [u8]], inverses: &'static [u8]) -> Vec<Self> {
        (0..table.len() as u8)
            .map(|x| Self { x, table, inverses })
            .collect()
    }
}

impl GroupElement for Cayley {
    fn compose(&self, other: &Self) -> Self {
        Self {
            x: self.table[self.x as usize][other.x as usize],
            ..*self
        }
    }

    fn invert(&self) -> Self {
        Self {
            x: self.inverses[self.x as usize],
            ..*self
        }
    }
}

/// The smallest loop that is not a group. Every element is its own inverse and 0 is a two-sided
/// identity, but `(1 · 1) · 2 != 1 · (1 · 2)`.
const LOOP: &[&[u8]] = &[
    &[0, 1, 2, 3, 4],
    &[1, 0, 3, 4, 2],
    &[2, 4, 0, 1, 3],
    &[3, 2, 4, 0, 1],
    &[4, 3, 1, 2, 0],
];

#[test]
fn non_associative_loop() {
    let elements = Cayley::all(LOOP, &[0, 1, 2, 3, 4]);
    let group = Group::construct([elements[1], elements[2]]).unwrap();

    assert_eq!(group.order(), 5);
    assert_eq!(*group.identity(), elements[0]);
    assert!(!group.is_abelian());
    assert!(!group.is_associative());

    let (a, b, c) = group.associativity_counterexample().unwrap();
    assert_eq!((a.x, b.x, c.x), (1, 1, 2));
}

/// Two disjoint copies of Z/2, `{a, ea}` and `{b, eb}`, each with its own identity.
const TWO_IDENTITIES: &[&[u8]] = &[
    &[1, 0, 0, 0],
    &[0, 1, 0, 0],
    &[2, 2, 3, 2],
    &[3, 3, 2, 3],
];

#[test]
fn generators_with_different_identities() {
    let elements = Cayley::all(TWO_IDENTITIES, &[0, 1, 2, 3]);
    assert_eq!(
        Group::construct([elements[0], elements[2]]),
        Err(ConstructionError::IdentityMismatch)
    );

    // Each generator on its own is fine.
    let group = Group::construct([elements[2]]).unwrap();
    assert_eq!(group.order(), 2);
    assert_eq!(*group.identity(), elements[3]);
}

/// `0 · 0 == 1` and everything else is 1, so the powers of 0 settle at 1 and never come back.
const ABSORBING: &[&[u8]] = &[&[1, 1], &[1, 1]];

#[test]
fn generator_that_never_returns() {
    let elements = Cayley::all(ABSORBING, &[0, 1]);
    assert_eq!(
        Group::construct([elements[0]]),
        Err(ConstructionError::NonReturningGenerator)
    );
}

/// Addition modulo `n`, with a broken inverse.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct SelfInverse(ModInt);

impl GroupElement for SelfInverse {
    fn compose(&self, other: &Self) -> Self {
        Self(self.0 + other.0)
    }

    fn invert(&self) -> Self {
        *self
    }
}

#[test]
fn wrong_inverse() {
    let generators = [SelfInverse(ModInt::new(1, 5)), SelfInverse(ModInt::new(2, 5))];
    assert_eq!(
        Group::construct(generators),
        Err(ConstructionError::AxiomViolation(Axiom::Inverse))
    );

    // With a single generator no axioms are checked.
    assert_eq!(
        Group::construct([SelfInverse(ModInt::new(1, 5))])
            .unwrap()
            .order(),
        5
    );
}

#[test]
fn idempotent_generator_among_others() {
    let generators = [
        Additive(ModInt::new(0, 4)),
        Additive(ModInt::new(1, 4)),
    ];
    assert_eq!(
        Group::construct(generators),
        Err(ConstructionError::AmbiguousIdentity)
    );
}

#[test]
fn no_generators() {
    assert_eq!(
        Group::<Permutation>::construct([]),
        Err(ConstructionError::NoGenerators)
    );
}

#[test]
fn infinite_cyclic_group() {
    assert_eq!(
        Group::construct_with([Additive(1i64)], &Limits::bounded(100)),
        Err(ConstructionError::LimitExceeded { max_elements: 100 })
    );
    assert_eq!(
        Group::construct_with([Additive(2i64), Additive(3i64)], &Limits::bounded(100)),
        Err(ConstructionError::LimitExceeded { max_elements: 100 })
    );
}

#[test]
fn limit_during_closure() {
    let err = Group::construct_with(Permutation::symmetric_generators(5), &Limits::bounded(60))
        .unwrap_err();
    assert_eq!(err, ConstructionError::LimitExceeded { max_elements: 60 });

    // A limit equal to the order is not exceeded.
    let group =
        Group::construct_with(Permutation::symmetric_generators(5), &Limits::bounded(120))
            .unwrap();
    assert_eq!(group.order(), 120);
}

#[test]
fn error_messages() {
    let errors = [
        ConstructionError::NoGenerators,
        ConstructionError::AmbiguousIdentity,
        ConstructionError::IdentityMismatch,
        ConstructionError::NonReturningGenerator,
        ConstructionError::AxiomViolation(Axiom::Inverse),
        ConstructionError::AxiomViolation(Axiom::LeftIdentity),
        ConstructionError::AxiomViolation(Axiom::RightIdentity),
        ConstructionError::LimitExceeded { max_elements: 7 },
    ];
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    expect![[r#"
        [
            "No generators were given",
            "A generator is idempotent but is not the only generator",
            "Generators disagree on the identity element",
            "The powers of a generator never return to the generator",
            "An element violates the axiom x * x^-1 = e",
            "An element violates the axiom e * x = x",
            "An element violates the axiom x * e = x",
            "The group has more than 7 elements",
        ]
    "#]]
    .assert_debug_eq(&messages);
}
