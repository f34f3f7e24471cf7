/// An element of a (candidate) group.
///
/// The operation is written multiplicatively and is not assumed to be commutative. Nothing about
/// the algebraic structure is verified by implementing this trait: `compose` and `invert` are
/// taken at face value, and it is up to group construction (`groups::Group::construct`) to decide
/// whether a set of elements actually generates a group.
///
/// The [`Ord`] bound is only used to store elements in a deterministic, deduplicated container.
/// It need not have anything to do with the group operation. The equality coming from [`Eq`] is
/// the equality of group elements, so two values that compare equal must represent the same
/// element.
pub trait GroupElement: Clone + Ord {
    /// Returns the product `self · other`.
    fn compose(&self, other: &Self) -> Self;

    /// Returns the inverse of `self`.
    fn invert(&self) -> Self;
}
