//! Immutable permutations of finite sets
//!
//! This crate provides hashable permutation values that are always kept in a canonical cycle
//! form, so that two permutations are equal exactly when they act the same. Permutations can be
//! built from point mappings, from cycle notation, as products of other permutations or by random
//! sampling, and support composition, powers, orders and orbit queries.
//!
//! ```
//! use frozenperm::Perm;
//!
//! let c = Perm::cycle(vec![1, 2, 3]).unwrap();
//! let m = Perm::from_pairs(vec![(1, 2), (2, 3), (3, 1)]).unwrap();
//! assert_eq!(c, m);
//! assert_eq!(c.apply(&3), 1);
//! assert_eq!(c.apply(&4), 4);
//! assert_eq!(c.pow(3), Perm::Identity);
//! assert_eq!(format!("{}", &c * &Perm::cycle(vec![4, 5]).unwrap()), "(1 2 3)(4 5)");
//! ```
pub mod action;
pub mod cycle;
pub mod error;
pub mod frozen;
pub mod int;
pub mod perm;
pub mod point;
pub mod random;

pub use crate::cycle::Cycle;
pub use crate::error::PermError;
pub use crate::frozen::FrozenMap;
pub use crate::perm::{Perm, Product};
pub use crate::point::{Point, Unordered};
pub use crate::random::{
    random_cycle, random_cycle_with, random_permutation, random_permutation_with, Domain,
};
