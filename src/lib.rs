//! Enumerates finite groups from a set of generators.
//!
//! The element type is anything implementing [`GroupElement`]: a composition, an inversion and a
//! total order used for storage. [`Group::construct`] closes a set of generators up under the
//! composition, checking the identity and inverse axioms on the way and recording whether the
//! result is commutative. Associativity is assumed during construction and can be checked
//! separately with [`Group::is_associative`].
//!
//! ```
//! use algebra::{Additive, ModInt, Permutation};
//! use groups::Group;
//!
//! let z5 = Group::construct([Additive(ModInt::new(1, 5))]).unwrap();
//! assert_eq!(z5.order(), 5);
//! assert!(z5.is_abelian());
//!
//! let s5 = Group::construct(Permutation::symmetric_generators(5)).unwrap();
//! assert_eq!(s5.order(), 120);
//! assert!(!s5.is_abelian());
//! ```
#![allow(clippy::type_complexity)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::if_not_else)]
#![warn(clippy::needless_continue)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::explicit_into_iter_loop)]

pub mod group;
pub mod utils;

pub use algebra::GroupElement;
pub use group::{Axiom, ConstructionError, Group, Limits};
