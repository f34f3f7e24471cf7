use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GroupElement;

/// A permutation of the points `0..degree`.
///
/// A permutation is stored as the list of images of each point, so `dests[i]` is where `i` is sent.
/// Composition follows the convention of function composition: `f.compose(&g)` is "apply `g`, then
/// `f`". Permutations are ordered lexicographically by their list of images. This order is only
/// used for bookkeeping.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Permutation {
    dests: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    /// An image is not one of the points being permuted.
    OutOfRange { image: usize, degree: usize },
    /// Two points are sent to the same image.
    Repeated(usize),
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { image, degree } => {
                write!(f, "Image {image} is out of range for a permutation of {degree} points")
            }
            Self::Repeated(image) => write!(f, "Image {image} appears more than once"),
        }
    }
}

impl std::error::Error for PermutationError {}

impl Permutation {
    /// Constructs a permutation from the list of images, checking that it is a bijection.
    pub fn new(dests: Vec<usize>) -> Result<Self, PermutationError> {
        let degree = dests.len();
        let mut seen = vec![false; degree];
        for &image in &dests {
            if image >= degree {
                return Err(PermutationError::OutOfRange { image, degree });
            }
            if std::mem::replace(&mut seen[image], true) {
                return Err(PermutationError::Repeated(image));
            }
        }
        Ok(Self { dests })
    }

    pub fn identity(degree: usize) -> Self {
        Self {
            dests: (0..degree).collect(),
        }
    }

    /// The cyclic permutation `points[0] -> points[1] -> ... -> points[0]`, fixing every other
    /// point of `0..degree`.
    pub fn from_cycle(degree: usize, points: &[usize]) -> Result<Self, PermutationError> {
        let mut dests: Vec<usize> = (0..degree).collect();
        let mut seen = BTreeSet::new();
        for (i, &point) in points.iter().enumerate() {
            if point >= degree {
                return Err(PermutationError::OutOfRange {
                    image: point,
                    degree,
                });
            }
            if !seen.insert(point) {
                return Err(PermutationError::Repeated(point));
            }
            dests[point] = points[(i + 1) % points.len()];
        }
        Ok(Self { dests })
    }

    /// The rotation `i -> i + 1 mod degree`.
    pub fn rotation(degree: usize) -> Self {
        Self {
            dests: (0..degree).map(|i| (i + 1) % degree).collect(),
        }
    }

    /// The reflection `i -> -i mod degree` of the vertices of a regular `degree`-gon.
    pub fn reflection(degree: usize) -> Self {
        Self {
            dests: (0..degree).map(|i| (degree - i) % degree).collect(),
        }
    }

    /// Views `self` as a permutation of `degree` points by acting trivially on the extra points.
    pub fn embed(&self, degree: usize) -> Self {
        assert!(
            degree >= self.degree(),
            "Cannot embed a permutation of {} points into one of {degree} points",
            self.degree()
        );
        let mut dests = self.dests.clone();
        dests.extend(self.degree()..degree);
        Self { dests }
    }

    /// A transposition and a `degree`-cycle, which together generate the symmetric group. For
    /// `degree <= 2` these coincide and the set has a single element.
    pub fn symmetric_generators(degree: usize) -> BTreeSet<Self> {
        let mut generators = BTreeSet::new();
        generators.insert(Self::rotation(degree));
        if degree >= 2 {
            let mut transposition = Self::identity(degree);
            transposition.dests.swap(0, 1);
            generators.insert(transposition);
        }
        generators
    }

    pub fn degree(&self) -> usize {
        self.dests.len()
    }

    pub fn apply(&self, point: usize) -> usize {
        self.dests[point]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.dests
    }

    pub fn is_identity(&self) -> bool {
        self.dests.iter().enumerate().all(|(i, &d)| i == d)
    }

    /// The cycles of length at least two, each starting with its smallest point, ordered by their
    /// first point.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.degree()];
        let mut cycles = Vec::new();
        for start in 0..self.degree() {
            if visited[start] || self.dests[start] == start {
                continue;
            }
            let mut cycle = Vec::new();
            let mut point = start;
            while !visited[point] {
                visited[point] = true;
                cycle.push(point);
                point = self.dests[point];
            }
            cycles.push(cycle);
        }
        cycles
    }
}

impl GroupElement for Permutation {
    fn compose(&self, other: &Self) -> Self {
        assert_eq!(
            self.degree(),
            other.degree(),
            "Tried to compose permutations of different degrees"
        );
        Self {
            dests: other.dests.iter().map(|&i| self.dests[i]).collect(),
        }
    }

    fn invert(&self) -> Self {
        let mut dests = vec![0; self.degree()];
        for (i, &d) in self.dests.iter().enumerate() {
            dests[d] = i;
        }
        Self { dests }
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = PermutationError;

    fn try_from(dests: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(dests)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Self {
        p.dests
    }
}

impl fmt::Display for Permutation {
    /// Cycle notation, e.g. `(0 1 2)(3 4)`. The identity is printed as `()`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return write!(f, "()");
        }
        for cycle in cycles {
            write!(f, "(")?;
            for (i, point) in cycle.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{point}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for Permutation {
    /// The degree of the permutation. A degree of zero is replaced by 5.
    type Parameters = usize;
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(degree: Self::Parameters) -> Self::Strategy {
        use proptest::strategy::{Just, Strategy};

        let degree = if degree == 0 { 5 } else { degree };
        Just((0..degree).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(|dests| Self { dests })
            .boxed()
    }
}
