use std::fmt;

/// The group axiom that an element was found to violate during closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axiom {
    /// `x · x⁻¹ == e`
    Inverse,
    /// `e · x == x`
    LeftIdentity,
    /// `x · e == x`
    RightIdentity,
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverse => write!(f, "x * x^-1 = e"),
            Self::LeftIdentity => write!(f, "e * x = x"),
            Self::RightIdentity => write!(f, "x * e = x"),
        }
    }
}

/// The reasons why a set of generators can fail to certify a finite group.
///
/// Construction stops at the first problem it finds, so only one cause is ever reported even if
/// several apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    NoGenerators,
    /// A generator satisfies `g · g == g` while other generators are present, so its cycle does
    /// not determine an identity.
    AmbiguousIdentity,
    /// Two generators have cyclic subgroups with different identities.
    IdentityMismatch,
    /// The powers of a generator entered a cycle that does not pass through the generator.
    NonReturningGenerator,
    AxiomViolation(Axiom),
    /// More than the permitted number of elements were discovered.
    LimitExceeded { max_elements: usize },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGenerators => write!(f, "No generators were given"),
            Self::AmbiguousIdentity => write!(
                f,
                "A generator is idempotent but is not the only generator"
            ),
            Self::IdentityMismatch => {
                write!(f, "Generators disagree on the identity element")
            }
            Self::NonReturningGenerator => {
                write!(f, "The powers of a generator never return to the generator")
            }
            Self::AxiomViolation(axiom) => write!(f, "An element violates the axiom {axiom}"),
            Self::LimitExceeded { max_elements } => {
                write!(f, "The group has more than {max_elements} elements")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}
