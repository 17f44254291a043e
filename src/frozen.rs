//! Immutable point mappings.
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::map::{IndexMap, Iter, Keys, Values};

use crate::point::Point;

/// An immutable, hashable mapping from points to points.
///
/// This is the storage behind [`Cycle`][crate::cycle::Cycle] and [`Perm`][crate::perm::Perm].
/// Fixed points (`key == value`) carry no information and are never stored. When the same key
/// is given more than once the last value wins.
///
/// Iteration follows the order in which keys were first inserted. Equality and hashing ignore
/// that order: two maps are equal when they have the same key/value pairs, and the hash is
/// computed once at construction over the set of pairs.
#[derive(Clone)]
pub struct FrozenMap<P: Point> {
    map: IndexMap<P, P>,
    hash: u64,
}

impl<P: Point> FrozenMap<P> {
    /// The empty mapping.
    pub fn new() -> FrozenMap<P> {
        FrozenMap {
            map: IndexMap::new(),
            hash: 0,
        }
    }

    /// Build a mapping from key/value pairs, dropping fixed points.
    pub fn from_pairs<I>(pairs: I) -> FrozenMap<P>
    where
        I: IntoIterator<Item = (P, P)>,
    {
        let mut map = IndexMap::new();
        for (key, value) in pairs {
            if key == value {
                // A later fixed point still overrides an earlier entry for the same key
                map.shift_remove(&key);
            } else {
                map.insert(key, value);
            }
        }

        // Commutative combination of per-pair hashes, so that insertion order doesn't matter
        let hash = map.iter().fold(0u64, |acc, pair| {
            let mut hasher = DefaultHasher::new();
            pair.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });

        FrozenMap { map, hash }
    }

    /// The image of `key`, if `key` is moved.
    pub fn get(&self, key: &P) -> Option<&P> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &P) -> bool {
        self.map.contains_key(key)
    }

    /// Number of stored (non-fixed) points.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> Keys<P, P> {
        self.map.keys()
    }

    pub fn values(&self) -> Values<P, P> {
        self.map.values()
    }

    /// Iterator over all key/value pairs.
    pub fn iter(&self) -> Iter<P, P> {
        self.map.iter()
    }
}

impl<P: Point> Default for FrozenMap<P> {
    fn default() -> FrozenMap<P> {
        FrozenMap::new()
    }
}

impl<P: Point> FromIterator<(P, P)> for FrozenMap<P> {
    fn from_iter<I: IntoIterator<Item = (P, P)>>(iter: I) -> FrozenMap<P> {
        FrozenMap::from_pairs(iter)
    }
}

impl<'a, P: Point> IntoIterator for &'a FrozenMap<P> {
    type Item = (&'a P, &'a P);
    type IntoIter = Iter<'a, P, P>;

    fn into_iter(self) -> Iter<'a, P, P> {
        self.iter()
    }
}

impl<P: Point> PartialEq for FrozenMap<P> {
    fn eq(&self, other: &FrozenMap<P>) -> bool {
        // IndexMap equality is order independent
        self.hash == other.hash && self.map == other.map
    }
}

impl<P: Point> Eq for FrozenMap<P> {}

impl<P: Point> Hash for FrozenMap<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<P: Point> fmt::Debug for FrozenMap<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}
