//! A catalogue of familiar finite groups, described by their standard generators.
//!
//! Every family uses the same element type, [`StandardElement`], so that groups chosen at runtime
//! (e.g. from a name typed on the command line) can be built by the same code path.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::Serialize;

use crate::{Additive, GroupElement, ModInt, Permutation, Product, Unit};

/// A group family together with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Family {
    /// The symmetric group on `n` points, of order `n!`.
    Symmetric(usize),
    /// The alternating group on `n >= 3` points, of order `n!/2`.
    Alternating(usize),
    /// The symmetries of a regular `n`-gon with `n >= 3`, of order `2n`.
    Dihedral(usize),
    /// The integers modulo `n` under addition.
    Cyclic(u32),
    /// The units modulo `n` under multiplication, of order `φ(n)`.
    Units(u32),
    Product(Box<Family>, Box<Family>),
}

/// The largest number of points that `S_n`, `A_n` and `D_n` may act on. Their generators are
/// built before any construction limit applies, and `A_n` has `n - 2` of them.
pub const MAX_DEGREE: usize = 1 << 10;

/// The largest `n` for `U_n`, whose generators are all of its units.
pub const MAX_UNITS_MODULUS: u32 = 1 << 16;

impl Family {
    /// Checks that the parameters are in range. The other methods assume this holds.
    pub fn validate(&self) -> anyhow::Result<()> {
        match self {
            Self::Symmetric(0) => Err(anyhow!("S_n requires n >= 1")),
            Self::Alternating(n) if *n < 3 => Err(anyhow!("A_n requires n >= 3, got {n}")),
            Self::Dihedral(n) if *n < 3 => Err(anyhow!("D_n requires n >= 3, got {n}")),
            Self::Symmetric(n) | Self::Alternating(n) | Self::Dihedral(n) if *n > MAX_DEGREE => {
                Err(anyhow!(
                    "{} acts on {n} points, but at most {MAX_DEGREE} are supported",
                    self
                ))
            }
            Self::Cyclic(0) => Err(anyhow!("Z_n requires n >= 1")),
            Self::Units(0) => Err(anyhow!("U_n requires n >= 1")),
            Self::Units(n) if *n > MAX_UNITS_MODULUS => Err(anyhow!(
                "U_n requires n <= {MAX_UNITS_MODULUS}, got {n}"
            )),
            Self::Product(a, b) => {
                a.validate()?;
                b.validate()
            }
            _ => Ok(()),
        }
    }

    pub fn identity(&self) -> StandardElement {
        match self {
            Self::Symmetric(n) | Self::Alternating(n) | Self::Dihedral(n) => {
                StandardElement::Permutation(Permutation::identity(*n))
            }
            Self::Cyclic(n) => StandardElement::Residue(Additive(ModInt::zero(*n))),
            Self::Units(n) => StandardElement::Unit(Unit::one(*n)),
            Self::Product(a, b) => StandardElement::product(a.identity(), b.identity()),
        }
    }

    /// The standard generating set of the group. The identity is only included when the group is
    /// trivial, since group construction requires every other generator to have a proper cycle.
    pub fn generators(&self) -> BTreeSet<StandardElement> {
        let mut generators: BTreeSet<StandardElement> = match self {
            Self::Symmetric(n) => Permutation::symmetric_generators(*n)
                .into_iter()
                .map(StandardElement::Permutation)
                .collect(),
            Self::Alternating(n) => (2..*n)
                .filter_map(|k| Permutation::from_cycle(*n, &[0, 1, k]).ok())
                .map(StandardElement::Permutation)
                .collect(),
            Self::Dihedral(n) => [Permutation::rotation(*n), Permutation::reflection(*n)]
                .into_iter()
                .map(StandardElement::Permutation)
                .collect(),
            Self::Cyclic(n) => std::iter::once(StandardElement::Residue(Additive(ModInt::one(*n))))
                .collect(),
            Self::Units(n) => Unit::all(*n)
                .into_iter()
                .map(StandardElement::Unit)
                .collect(),
            Self::Product(a, b) => {
                let (ea, eb) = (a.identity(), b.identity());
                let left = a
                    .generators()
                    .into_iter()
                    .map(|g| StandardElement::product(g, eb.clone()));
                let right = b
                    .generators()
                    .into_iter()
                    .map(|h| StandardElement::product(ea.clone(), h));
                left.chain(right).collect()
            }
        };
        let identity = self.identity();
        if generators.len() > 1 {
            generators.remove(&identity);
        }
        generators
    }

    /// The order of the group, or `None` if it does not fit in a `u64`.
    pub fn order(&self) -> Option<u64> {
        match self {
            Self::Symmetric(n) => factorial(*n),
            Self::Alternating(n) => factorial(*n).map(|f| f / 2),
            Self::Dihedral(n) => (*n as u64).checked_mul(2),
            Self::Cyclic(n) => Some(*n as u64),
            Self::Units(n) => Some(totient(*n) as u64),
            Self::Product(a, b) => a.order()?.checked_mul(b.order()?),
        }
    }
}

fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Euler's totient function.
fn totient(mut n: u32) -> u32 {
    let mut result = n;
    let mut p = 2;
    while (p as u64) * (p as u64) <= n as u64 {
        if n % p == 0 {
            while n % p == 0 {
                n /= p;
            }
            result -= result / p;
        }
        p += 1;
    }
    if n > 1 {
        result -= result / n;
    }
    result
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symmetric(n) => write!(f, "S{n}"),
            Self::Alternating(n) => write!(f, "A{n}"),
            Self::Dihedral(n) => write!(f, "D{n}"),
            Self::Cyclic(n) => write!(f, "Z{n}"),
            Self::Units(n) => write!(f, "U{n}"),
            Self::Product(a, b) => match **b {
                Self::Product(..) => write!(f, "{a} x ({b})"),
                _ => write!(f, "{a} x {b}"),
            },
        }
    }
}

impl FromStr for Family {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_family(s)
    }
}

/// The element type shared by every [`Family`].
///
/// Composing elements coming from different families (e.g. a permutation with a residue) is a
/// logic error and panics.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(untagged)]
pub enum StandardElement {
    Permutation(Permutation),
    Residue(Additive<ModInt>),
    Unit(Unit),
    Product(Box<Product<StandardElement, StandardElement>>),
}

impl StandardElement {
    pub fn product(a: Self, b: Self) -> Self {
        Self::Product(Box::new(Product(a, b)))
    }
}

impl GroupElement for StandardElement {
    fn compose(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Permutation(a), Self::Permutation(b)) => Self::Permutation(a.compose(b)),
            (Self::Residue(a), Self::Residue(b)) => Self::Residue(a.compose(b)),
            (Self::Unit(a), Self::Unit(b)) => Self::Unit(a.compose(b)),
            (Self::Product(a), Self::Product(b)) => Self::Product(Box::new(a.compose(b))),
            _ => panic!("Tried to compose elements of different families: {self} and {other}"),
        }
    }

    fn invert(&self) -> Self {
        match self {
            Self::Permutation(a) => Self::Permutation(a.invert()),
            Self::Residue(a) => Self::Residue(a.invert()),
            Self::Unit(a) => Self::Unit(a.invert()),
            Self::Product(a) => Self::Product(Box::new(a.invert())),
        }
    }
}

impl fmt::Display for StandardElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permutation(a) => a.fmt(f),
            Self::Residue(a) => a.fmt(f),
            Self::Unit(a) => a.fmt(f),
            Self::Product(a) => a.fmt(f),
        }
    }
}
