use std::fmt::Debug;

use groups::{Group, GroupElement};
use itertools::iproduct;

/// Checks the group axioms that construction is supposed to guarantee, by brute force.
pub fn check_group_properties<E: GroupElement + Debug>(group: &Group<E>) {
    let e = group.identity();
    assert!(group.contains(e), "identity {e:?} is not an element");

    let identities: Vec<&E> = group
        .iter()
        .filter(|&x| group.iter().all(|y| x.compose(y) == *y && y.compose(x) == *y))
        .collect();
    assert_eq!(identities, vec![e], "identity is not unique");

    for (x, y) in iproduct!(group.iter(), group.iter()) {
        assert!(
            group.contains(&x.compose(y)),
            "{x:?} * {y:?} is not an element"
        );
    }

    for x in group {
        assert!(
            group
                .iter()
                .any(|y| x.compose(y) == *e && y.compose(x) == *e),
            "{x:?} has no inverse"
        );
    }

    let commutative =
        iproduct!(group.iter(), group.iter()).all(|(x, y)| x.compose(y) == y.compose(x));
    assert_eq!(group.is_abelian(), commutative);
}
