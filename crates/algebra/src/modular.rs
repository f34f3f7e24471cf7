//! Integers modulo `n`, both as an additive group ([`ModInt`], through
//! [`Additive`](crate::Additive)) and as the multiplicative group of units ([`Unit`]).

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::GroupElement;

/// A residue modulo `modulus`. The value is always reduced, so `0 <= value < modulus`.
///
/// Arithmetic between residues of different moduli is a logic error and panics.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawModInt")]
pub struct ModInt {
    value: u32,
    modulus: u32,
}

/// The serialized form of a [`ModInt`], before reduction.
#[derive(Deserialize)]
struct RawModInt {
    value: u32,
    modulus: u32,
}

impl TryFrom<RawModInt> for ModInt {
    type Error = &'static str;

    fn try_from(raw: RawModInt) -> Result<Self, Self::Error> {
        if raw.modulus == 0 {
            return Err("residues modulo 0 are not allowed");
        }
        Ok(Self::new(raw.value, raw.modulus))
    }
}

impl ModInt {
    pub fn new(value: u32, modulus: u32) -> Self {
        assert!(modulus > 0, "Tried to construct a residue modulo 0");
        Self {
            value: value % modulus,
            modulus,
        }
    }

    pub fn zero(modulus: u32) -> Self {
        Self::new(0, modulus)
    }

    pub fn one(modulus: u32) -> Self {
        Self::new(1, modulus)
    }

    pub fn value(self) -> u32 {
        self.value
    }

    pub fn modulus(self) -> u32 {
        self.modulus
    }

    fn check_modulus(self, other: Self) {
        assert_eq!(
            self.modulus, other.modulus,
            "Tried to combine residues of different moduli"
        );
    }
}

impl Add for ModInt {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.check_modulus(other);
        let sum = (self.value as u64 + other.value as u64) % self.modulus as u64;
        Self {
            value: sum as u32,
            modulus: self.modulus,
        }
    }
}

impl Neg for ModInt {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.modulus - self.value, self.modulus)
    }
}

impl Sub for ModInt {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Mul for ModInt {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.check_modulus(other);
        let product = (self.value as u64 * other.value as u64) % self.modulus as u64;
        Self {
            value: product as u32,
            modulus: self.modulus,
        }
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for ModInt {
    /// The modulus. If `None`, an arbitrary modulus in `1..=64` is chosen.
    type Parameters = Option<std::num::NonZeroU32>;
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(modulus: Self::Parameters) -> Self::Strategy {
        use proptest::strategy::{Just, Strategy};

        let modulus = match modulus {
            Some(m) => Just(m.get()).boxed(),
            None => (1..=64u32).boxed(),
        };
        modulus
            .prop_flat_map(|m| (0..m).prop_map(move |v| Self::new(v, m)))
            .boxed()
    }
}

/// Computes the inverse of `a` modulo `n`, if `a` is a unit.
pub fn inverse_mod(a: u32, n: u32) -> Option<u32> {
    if n == 1 {
        return Some(0);
    }
    let (mut r0, mut r1) = (n as i64, (a % n) as i64);
    let (mut t0, mut t1) = (0i64, 1i64);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (t0, t1) = (t1, t0 - q * t1);
    }
    if r0 != 1 {
        return None;
    }
    Some(t0.rem_euclid(n as i64) as u32)
}

/// An element of the multiplicative group of units modulo `n`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct Unit(ModInt);

impl Unit {
    /// Returns `None` if `value` is not coprime to `modulus`.
    pub fn new(value: u32, modulus: u32) -> Option<Self> {
        let residue = ModInt::new(value, modulus);
        inverse_mod(residue.value, modulus).map(|_| Self(residue))
    }

    pub fn one(modulus: u32) -> Self {
        Self(ModInt::one(modulus))
    }

    /// All units modulo `modulus`, in increasing order.
    pub fn all(modulus: u32) -> Vec<Self> {
        (0..modulus).filter_map(|v| Self::new(v, modulus)).collect()
    }

    pub fn residue(self) -> ModInt {
        self.0
    }
}

impl GroupElement for Unit {
    fn compose(&self, other: &Self) -> Self {
        Self(self.0 * other.0)
    }

    fn invert(&self) -> Self {
        let modulus = self.0.modulus;
        // The constructor guarantees that the residue is invertible.
        let inverse = inverse_mod(self.0.value, modulus).unwrap_or_default();
        Self(ModInt::new(inverse, modulus))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
