//! Random permutations and cycles.
//!
//! Every sampler comes in two flavors: one taking an explicit [`Rng`] and one using the thread
//! local generator returned by [`rand::rng`], which is seeded from the operating system on first
//! use in each thread.
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::error::PermError;
use crate::perm::Perm;
use crate::point::Point;

/// The points a random permutation or cycle is drawn over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain<P> {
    points: Vec<P>,
}

impl<P> Domain<P> {
    /// A domain consisting of the given points.
    pub fn new<I>(points: I) -> Domain<P>
    where
        I: IntoIterator<Item = P>,
    {
        Domain {
            points: points.into_iter().collect(),
        }
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Domain<usize> {
    /// The points `0..n`.
    pub fn count(n: usize) -> Domain<usize> {
        Domain::new(0..n)
    }
}

impl Domain<i64> {
    /// The points `start, start + step, ...` strictly before `stop`.
    ///
    /// A negative step counts down towards `stop`. Fails for a zero step.
    pub fn range(start: i64, stop: i64, step: i64) -> Result<Domain<i64>, PermError> {
        if step == 0 {
            return Err(PermError::InvalidArgument("range step must not be zero"));
        }

        let mut points = vec![];
        let mut current = Some(start);
        while let Some(point) = current {
            let inside = if step > 0 { point < stop } else { point > stop };
            if !inside {
                break;
            }
            points.push(point);
            current = point.checked_add(step);
        }

        Ok(Domain { points })
    }

    /// Build a domain from one to three range arguments.
    ///
    /// `[stop]` counts from zero, `[start, stop]` uses a step of one and `[start, stop, step]`
    /// is passed to [`Domain::range`] as is. Any other number of arguments is an error.
    pub fn from_range_args(args: &[i64]) -> Result<Domain<i64>, PermError> {
        match *args {
            [] => Err(PermError::InvalidArgument(
                "expected a domain or range arguments",
            )),
            [stop] => Domain::range(0, stop, 1),
            [start, stop] => Domain::range(start, stop, 1),
            [start, stop, step] => Domain::range(start, stop, step),
            _ => Err(PermError::InvalidArgument(
                "expected at most three range arguments",
            )),
        }
    }
}

impl<P> From<Vec<P>> for Domain<P> {
    fn from(points: Vec<P>) -> Domain<P> {
        Domain { points }
    }
}

impl<P> FromIterator<P> for Domain<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Domain<P> {
        Domain::new(iter)
    }
}

/// A uniformly random permutation of `domain`, using the thread local generator.
///
/// Fails when the domain contains duplicate points that make the sampled mapping non-injective.
pub fn random_permutation<P, D>(domain: D) -> Result<Perm<P>, PermError>
where
    P: Point,
    D: Into<Domain<P>>,
{
    random_permutation_with(domain, &mut rand::rng())
}

/// A uniformly random permutation of `domain`.
pub fn random_permutation_with<P, D, R>(domain: D, rng: &mut R) -> Result<Perm<P>, PermError>
where
    P: Point,
    D: Into<Domain<P>>,
    R: Rng + ?Sized,
{
    let points = domain.into().points;
    let mut images = points.clone();
    images.shuffle(rng);
    trace!(len = points.len(), "sampling permutation");
    Perm::from_pairs(points.into_iter().zip(images))
}

/// A random cycle through all points of `domain`, using the thread local generator.
///
/// Fails when the domain contains duplicate points.
pub fn random_cycle<P, D>(domain: D) -> Result<Perm<P>, PermError>
where
    P: Point,
    D: Into<Domain<P>>,
{
    random_cycle_with(domain, &mut rand::rng())
}

/// A random cycle through all points of `domain`.
pub fn random_cycle_with<P, D, R>(domain: D, rng: &mut R) -> Result<Perm<P>, PermError>
where
    P: Point,
    D: Into<Domain<P>>,
    R: Rng + ?Sized,
{
    let mut points = domain.into().points;
    points.shuffle(rng);
    trace!(len = points.len(), "sampling cycle");
    Perm::cycle(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn range_arguments() {
        assert_eq!(Domain::from_range_args(&[4]).unwrap().points(), &[0, 1, 2, 3]);
        assert_eq!(Domain::from_range_args(&[2, 5]).unwrap().points(), &[2, 3, 4]);
        assert_eq!(
            Domain::from_range_args(&[10, 0, -3]).unwrap().points(),
            &[10, 7, 4, 1]
        );
        assert!(Domain::from_range_args(&[5, 2]).unwrap().is_empty());
        assert_eq!(Domain::count(3).points(), &[0, 1, 2]);
    }

    #[test]
    fn invalid_range_arguments() {
        assert!(matches!(
            Domain::from_range_args(&[]),
            Err(PermError::InvalidArgument(_))
        ));
        assert!(matches!(
            Domain::from_range_args(&[1, 2, 3, 4]),
            Err(PermError::InvalidArgument(_))
        ));
        assert!(matches!(
            Domain::range(0, 10, 0),
            Err(PermError::InvalidArgument(_))
        ));
    }

    #[test]
    fn range_near_overflow() {
        let domain = Domain::range(i64::MAX - 2, i64::MAX, 5).unwrap();
        assert_eq!(domain.points(), &[i64::MAX - 2]);
    }

    #[test]
    fn permutation_stays_in_domain() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let perm = random_permutation_with(Domain::count(20), &mut rng).unwrap();
            let images: HashSet<usize> = (0..20).map(|p| perm.apply(&p)).collect();
            assert_eq!(images.len(), 20);
            assert!(images.iter().all(|&p| p < 20));
            assert!(perm.support().all(|&p| p < 20));
        }
    }

    #[test]
    fn seeded_samples_repeat() {
        let a = random_permutation_with(vec!['a', 'b', 'c', 'd', 'e'], &mut StdRng::seed_from_u64(7));
        let b = random_permutation_with(vec!['a', 'b', 'c', 'd', 'e'], &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn cycle_covers_domain() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 2..30 {
            let perm = random_cycle_with(Domain::count(n), &mut rng).unwrap();
            assert_eq!(perm.orbits().len(), 1);
            assert_eq!(perm.len(), n);
        }
    }

    #[test]
    fn small_domains() {
        assert_eq!(random_cycle(Domain::count(1)), Ok(Perm::Identity));
        assert_eq!(random_permutation(Domain::<u8>::new(vec![])), Ok(Perm::Identity));
        assert_eq!(random_cycle(vec![1u8, 1]), Ok(Perm::Identity));
    }

    #[test]
    fn default_generator() {
        let perm = random_permutation(Domain::from_range_args(&[-5, 5]).unwrap()).unwrap();
        assert!(perm.support().all(|&p| (-5..5).contains(&p)));
        let cycle = random_cycle(vec!["x", "y", "z"]).unwrap();
        assert_eq!(cycle.order(), num_bigint::BigUint::from(3u32));
    }
}
