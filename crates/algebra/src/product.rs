use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GroupElement;

/// An element of the direct product of two groups. Operations are componentwise and elements are
/// ordered lexicographically.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Product<A, B>(pub A, pub B);

impl<A: GroupElement, B: GroupElement> GroupElement for Product<A, B> {
    fn compose(&self, other: &Self) -> Self {
        Self(self.0.compose(&other.0), self.1.compose(&other.1))
    }

    fn invert(&self) -> Self {
        Self(self.0.invert(), self.1.invert())
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Product<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
