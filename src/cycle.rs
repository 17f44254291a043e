//! Single cycles.
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;

use num_integer::Integer;
use num_traits::{FromPrimitive, ToPrimitive};
use tracing::debug;

use crate::error::PermError;
use crate::frozen::FrozenMap;
use crate::int::gcd;
use crate::perm::Perm;
use crate::point::{min_position, Point};

/// A cyclic permutation of two or more points.
///
/// The cycle `(e0 e1 ... en-1)` maps each `ei` to `ei+1` and the last point back to `e0`. Cycles
/// are stored rotated so that the least point comes first (when the point type has an order), so
/// two cycles that act the same are also written the same.
///
/// Cycles are obtained from [`Perm::cycle`], or as the orbits of a [`Perm`]. There is no way to
/// construct a cycle of fewer than two points; those collapse to [`Perm::Identity`].
#[derive(Clone)]
pub struct Cycle<P: Point> {
    points: Vec<P>,
    map: FrozenMap<P>,
}

impl<P: Point> Cycle<P> {
    /// Validate a cycle sequence.
    ///
    /// The sequence may repeat the whole cycle any number of times, e.g. `[1, 2, 3, 1, 2, 3]`, as
    /// long as every repetition follows the cycle given by its first pass. Returns `None` when the
    /// sequence describes the identity.
    pub(crate) fn parse(points: Vec<P>) -> Result<Option<Cycle<P>>, PermError> {
        if points.len() <= 1 {
            return Ok(None);
        }

        let repeat_index = points[1..]
            .iter()
            .position(|p| *p == points[0])
            .map_or(points.len(), |i| i + 1);
        let (head, repeat) = points.split_at(repeat_index);

        let adjacency: HashMap<&P, &P> = head.iter().zip(head.iter().cycle().skip(1)).collect();
        if adjacency.len() < head.len() {
            debug!(?points, "rejecting inconsistent cycle");
            return Err(PermError::InconsistentCycle {
                points: format!("{:?}", points),
            });
        }

        for (i, p) in repeat.iter().enumerate() {
            let next = repeat.get(i + 1).unwrap_or(&head[0]);
            if adjacency.get(p) != Some(&next) {
                debug!(?points, "rejecting non-cyclic repetition");
                return Err(PermError::NonCyclic {
                    points: format!("{:?}", points),
                });
            }
        }

        if head.len() <= 1 {
            // Something like [x, x, x]
            return Ok(None);
        }

        Ok(Some(Cycle::from_orbit(head.to_vec())))
    }

    /// Build a cycle from the points of an orbit, which must be distinct and at least two.
    pub(crate) fn from_orbit(mut points: Vec<P>) -> Cycle<P> {
        debug_assert!(points.len() >= 2);
        if let Some(least) = min_position(&points) {
            points.rotate_left(least);
        }
        let map = FrozenMap::from_pairs(
            points
                .iter()
                .cloned()
                .zip(points.iter().cycle().skip(1).cloned()),
        );
        Cycle { points, map }
    }

    /// The points of this cycle in cycle order, starting with the least point.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// The first point of this cycle.
    ///
    /// For ordered point types this is the least point of the cycle.
    pub fn first(&self) -> &P {
        &self.points[0]
    }

    /// Number of points moved by this cycle.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Cycles always move at least two points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The multiplicative order, which is the length of the cycle.
    pub fn order(&self) -> usize {
        self.points.len()
    }

    pub fn contains(&self, point: &P) -> bool {
        self.map.contains_key(point)
    }

    /// Apply this cycle to a point. Points outside of the cycle are fixed.
    pub fn apply(&self, point: &P) -> P {
        self.map.get(point).unwrap_or(point).clone()
    }

    /// The underlying point mapping.
    pub fn mapping(&self) -> &FrozenMap<P> {
        &self.map
    }

    pub fn iter(&self) -> slice::Iter<P> {
        self.points.iter()
    }

    /// The inverse cycle, traversing the same points backwards.
    pub fn reversed(&self) -> Cycle<P> {
        Cycle::from_orbit(self.points.iter().rev().cloned().collect())
    }

    /// A power of this cycle.
    ///
    /// Negative exponents are supported. The result is a single cycle when the exponent is coprime
    /// to the length and splits into `gcd(exponent, length)` cycles otherwise.
    pub fn pow<E>(&self, exponent: E) -> Perm<P>
    where
        E: Integer + ToPrimitive + FromPrimitive,
    {
        let n = self.len();
        let e = reduce_exponent(&exponent, n);

        if e == 0 {
            return Perm::Identity;
        } else if e == 1 {
            return Perm::Cycle(self.clone());
        } else if e == n - 1 {
            return Perm::Cycle(self.reversed());
        } else if gcd(vec![e, n]) == 1 {
            return Perm::Cycle(Cycle::from_orbit(self.stride_walk(0, e, &mut vec![])));
        }

        let mut seen = vec![false; n];
        let mut cycles = vec![];
        for start in 0..n {
            if !seen[start] {
                cycles.push(Cycle::from_orbit(self.stride_walk(start, e, &mut seen)));
            }
        }

        Perm::from_disjoint(cycles)
    }

    /// Visit every `stride`th point starting at index `start` until returning to `start`.
    ///
    /// Visited indices are recorded in `seen` unless it is empty.
    fn stride_walk(&self, start: usize, stride: usize, seen: &mut Vec<bool>) -> Vec<P> {
        let n = self.len();
        let mut walk = vec![];
        let mut index = start;
        loop {
            if let Some(visited) = seen.get_mut(index) {
                *visited = true;
            }
            walk.push(self.points[index].clone());
            index = (index + stride) % n;
            if index == start {
                return walk;
            }
        }
    }

    /// Decompose into transpositions.
    ///
    /// The cycle `(a b c d)` yields `(a d)`, `(a c)`, `(a b)`, so that their product, applying
    /// the rightmost first, is the cycle itself.
    pub fn transpositions(&self) -> impl Iterator<Item = Cycle<P>> + '_ {
        let first = self.first();
        self.points
            .iter()
            .rev()
            .take_while(move |&p| p != first)
            .map(move |p| Cycle::from_orbit(vec![first.clone(), p.clone()]))
    }
}

/// Reduce an exponent modulo `n` into `0..n`.
pub(crate) fn reduce_exponent<E>(exponent: &E, n: usize) -> usize
where
    E: Integer + ToPrimitive + FromPrimitive,
{
    if let Some(e) = exponent.to_i128() {
        return e.rem_euclid(n as i128) as usize;
    }
    // Only arbitrary precision exponents end up here, and those can hold any modulus
    E::from_usize(n)
        .and_then(|modulus| exponent.mod_floor(&modulus).to_usize())
        .unwrap_or(0)
}

impl<P: Point> PartialEq for Cycle<P> {
    fn eq(&self, other: &Cycle<P>) -> bool {
        self.map == other.map
    }
}

impl<P: Point> Eq for Cycle<P> {}

impl<P: Point> Hash for Cycle<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state);
    }
}

impl<'a, P: Point> IntoIterator for &'a Cycle<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> slice::Iter<'a, P> {
        self.points.iter()
    }
}

impl<P: Point> fmt::Display for Cycle<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for p in self.points.iter() {
            f.write_str(if first { "(" } else { " " })?;
            first = false;
            fmt::Debug::fmt(p, f)?;
        }
        f.write_str(")")
    }
}

impl<P: Point> fmt::Debug for Cycle<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::point::Unordered;

    fn cycle<P: Point>(points: Vec<P>) -> Cycle<P> {
        Cycle::parse(points).unwrap().unwrap()
    }

    #[test]
    fn short_sequences_are_identity() {
        assert_eq!(Cycle::<u32>::parse(vec![]), Ok(None));
        assert_eq!(Cycle::parse(vec![7]), Ok(None));
        assert_eq!(Cycle::parse(vec![7, 7, 7]), Ok(None));
    }

    #[test]
    fn rotated_to_least() {
        assert_eq!(cycle(vec![3, 1, 2]).points(), &[1, 2, 3]);
        assert_eq!(cycle(vec!['c', 'a', 'b']).first(), &'a');
    }

    #[test]
    fn unordered_keeps_rotation() {
        let c = cycle(vec![Unordered(3), Unordered(1), Unordered(2)]);
        assert_eq!(c.points(), &[Unordered(3), Unordered(1), Unordered(2)]);

        let d = cycle(vec![Unordered(1), Unordered(2), Unordered(3)]);
        assert_eq!(c, d);
    }

    #[test]
    fn repeated_cycle_accepted() {
        assert_eq!(cycle(vec![1, 2, 3, 1, 2, 3]), cycle(vec![1, 2, 3]));
        assert_eq!(cycle(vec![2, 3, 1, 2, 3, 1, 2, 3, 1]), cycle(vec![1, 2, 3]));
        assert!(Cycle::parse(vec![1, 2, 3, 1, 2]).is_err());
    }

    #[test]
    fn non_cyclic_repetition_rejected() {
        match Cycle::parse(vec![1, 2, 3, 1, 2, 4]) {
            Err(PermError::NonCyclic { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn inconsistent_cycle_rejected() {
        match Cycle::parse(vec![1, 2, 3, 2]) {
            Err(PermError::InconsistentCycle { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn apply_fixes_other_points() {
        let c = cycle(vec![1, 2, 3]);
        assert_eq!(c.apply(&1), 2);
        assert_eq!(c.apply(&2), 3);
        assert_eq!(c.apply(&3), 1);
        assert_eq!(c.apply(&4), 4);
    }

    #[test]
    fn fmt_cycle() {
        assert_eq!(format!("{}", cycle(vec![2, 0, 1])), "(0 1 2)");
        assert_eq!(format!("{:?}", cycle(vec!["b", "a"])), "(\"a\" \"b\")");
    }

    #[test]
    fn coprime_powers() {
        let five = cycle(vec![0, 1, 2, 3, 4]);
        assert_eq!(five.pow(2), Perm::Cycle(cycle(vec![0, 2, 4, 1, 3])));

        let four = cycle(vec![0, 1, 2, 3]);
        assert_eq!(four.pow(3), Perm::Cycle(cycle(vec![0, 3, 2, 1])));
        assert_eq!(four.pow(-1), four.pow(3));
        assert_eq!(four.pow(4), Perm::Identity);
        assert_eq!(four.pow(5u8), Perm::Cycle(four.clone()));
    }

    #[test]
    fn split_powers() {
        let four = cycle(vec![0, 1, 2, 3]);
        let square = four.pow(2);
        assert_eq!(square.orbits(), &[cycle(vec![0, 2]), cycle(vec![1, 3])]);

        let six = cycle(vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(
            six.pow(2).orbits(),
            &[cycle(vec![0, 2, 4]), cycle(vec![1, 3, 5])]
        );
        assert_eq!(
            six.pow(3).orbits(),
            &[cycle(vec![0, 3]), cycle(vec![1, 4]), cycle(vec![2, 5])]
        );
    }

    #[test]
    fn reduce_exponent_signs() {
        assert_eq!(reduce_exponent(&-1i8, 200), 199);
        assert_eq!(reduce_exponent(&7u64, 5), 2);
        assert_eq!(reduce_exponent(&-7i32, 5), 3);
    }

    #[test]
    fn transpositions_multiply_back() {
        let c = cycle(vec![1, 2, 3, 4]);
        let ts: Vec<_> = c.transpositions().collect();
        assert_eq!(ts, vec![cycle(vec![1, 4]), cycle(vec![1, 3]), cycle(vec![1, 2])]);
        assert_eq!(
            Perm::product(ts.into_iter().map(Perm::Cycle)),
            Perm::Cycle(c)
        );

        let t = cycle(vec![5, 6]);
        assert_eq!(t.transpositions().collect::<Vec<_>>(), vec![t.clone()]);
    }
}
