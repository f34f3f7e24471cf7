//! Types and traits for working with elements of finite groups: the [`GroupElement`] capability
//! trait, a few concrete element types, and a catalogue of standard group families.

mod element;
pub use element::GroupElement;

mod additive;
pub use additive::Additive;

pub mod modular;
pub use modular::{ModInt, Unit};

pub mod permutation;
pub use permutation::{Permutation, PermutationError};

mod product;
pub use product::Product;

pub mod parser;

pub mod standard;
pub use standard::{Family, StandardElement};
