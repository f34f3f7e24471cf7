use std::fmt;
use std::ops::{Add, Neg};

use serde::{Deserialize, Serialize};

use crate::GroupElement;

/// Presents a type whose group operation is written additively as a [`GroupElement`].
///
/// Abelian groups are usually written with `+` and `-`, which is also how the standard numeric
/// types implement them. Wrapping such a value in `Additive` makes `compose` call `+` and `invert`
/// call unary `-`. Any multiplication the wrapped type has is not visible through the wrapper.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Additive<T>(pub T);

impl<T> Additive<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> GroupElement for Additive<T>
where
    T: Add<Output = T> + Neg<Output = T> + Clone + Ord,
{
    fn compose(&self, other: &Self) -> Self {
        Self(self.0.clone() + other.0.clone())
    }

    fn invert(&self) -> Self {
        Self(-self.0.clone())
    }
}

impl<T: fmt::Display> fmt::Display for Additive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> From<T> for Additive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
