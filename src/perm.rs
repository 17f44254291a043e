//! Permutations of finite sets.
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Mul;
use std::slice;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{FromPrimitive, One, ToPrimitive};
use tracing::{debug, trace};

use crate::action::{LeftAction, RightAction};
use crate::cycle::Cycle;
use crate::error::PermError;
use crate::frozen::FrozenMap;
use crate::int::lcm;
use crate::point::{sort_by_point, Point};

/// A permutation of a finite set of points.
///
/// A permutation is a bijection from a set to itself. Every `Perm` only records the points it
/// moves, its support; all other points are implicitly fixed, so every permutation can be applied
/// to any point and any two permutations over the same point type can be composed.
///
/// Internally a permutation is always kept in canonical form. The identity is [`Perm::Identity`],
/// a permutation with a single nontrivial orbit is a [`Perm::Cycle`] and everything else is a
/// [`Perm::Product`] of disjoint cycles ordered by their least point. Consequently two
/// permutations compare (and hash) equal exactly when they act the same, no matter how they were
/// constructed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Perm<P: Point> {
    /// The identity permutation, fixing every point.
    Identity,
    /// A single cycle.
    Cycle(Cycle<P>),
    /// A product of two or more disjoint cycles.
    Product(Product<P>),
}

/// A product of at least two disjoint cycles.
#[derive(Clone)]
pub struct Product<P: Point> {
    orbits: Vec<Cycle<P>>,
    map: FrozenMap<P>,
    order: BigUint,
}

impl<P: Point> Product<P> {
    /// The disjoint cycles of this product, ordered by their first point.
    pub fn orbits(&self) -> &[Cycle<P>] {
        &self.orbits
    }

    /// The underlying point mapping.
    pub fn mapping(&self) -> &FrozenMap<P> {
        &self.map
    }
}

impl<P: Point> PartialEq for Product<P> {
    fn eq(&self, other: &Product<P>) -> bool {
        self.map == other.map
    }
}

impl<P: Point> Eq for Product<P> {}

impl<P: Point> Hash for Product<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state);
    }
}

impl<P: Point> Perm<P> {
    /// The identity permutation.
    pub fn identity() -> Perm<P> {
        Perm::Identity
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Perm::Identity)
    }

    /// Create a permutation from pairs mapping points to their images.
    ///
    /// Pairs mapping a point to itself are ignored and when a point is given more than once the
    /// last image wins. Fails when the remaining pairs don't form a bijection on the points they
    /// mention, e.g. when two points share an image or an image is never mapped itself.
    pub fn from_pairs<I>(pairs: I) -> Result<Perm<P>, PermError>
    where
        I: IntoIterator<Item = (P, P)>,
    {
        let map = FrozenMap::from_pairs(pairs);
        let orbits = decompose(&map)?;
        trace!(support = map.len(), orbits = orbits.len(), "decomposed mapping");
        Ok(Perm::from_disjoint(orbits))
    }

    /// Create a cycle mapping each point to the next one and the last one to the first.
    ///
    /// Sequences of fewer than two points give the identity. The sequence may repeat the cycle,
    /// as in `[1, 2, 3, 1, 2, 3]`, as long as it does so exactly.
    pub fn cycle<I>(points: I) -> Result<Perm<P>, PermError>
    where
        I: IntoIterator<Item = P>,
    {
        Ok(Cycle::parse(points.into_iter().collect())?.map_or(Perm::Identity, Perm::Cycle))
    }

    /// Create the product of several cycles, given as point sequences.
    ///
    /// The cycles need not be disjoint; they are composed with the rightmost applied first.
    pub fn from_cycles<I, C>(cycles: I) -> Result<Perm<P>, PermError>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = P>,
    {
        let terms = cycles
            .into_iter()
            .map(Perm::cycle)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Perm::product(terms))
    }

    /// The product of all terms, with the rightmost term applied first.
    ///
    /// The empty product is the identity.
    pub fn product<I>(terms: I) -> Perm<P>
    where
        I: IntoIterator<Item = Perm<P>>,
    {
        terms
            .into_iter()
            .fold(Perm::Identity, |acc, term| acc.compose(&term))
    }

    /// Assemble a permutation from pairwise disjoint cycles.
    pub(crate) fn from_disjoint(mut orbits: Vec<Cycle<P>>) -> Perm<P> {
        sort_by_point(&mut orbits, |orbit| orbit.first());
        match orbits.len() {
            0 => Perm::Identity,
            1 => Perm::Cycle(orbits.remove(0)),
            _ => {
                let map = FrozenMap::from_pairs(
                    orbits
                        .iter()
                        .flat_map(|orbit| orbit.mapping().iter())
                        .map(|(k, v)| (k.clone(), v.clone())),
                );
                let order = lcm(orbits.iter().map(|orbit| BigUint::from(orbit.len())));
                Perm::Product(Product { orbits, map, order })
            }
        }
    }

    /// Apply this permutation to a point.
    ///
    /// Points outside of the support are returned unchanged.
    pub fn apply(&self, point: &P) -> P {
        match self {
            Perm::Identity => point.clone(),
            Perm::Cycle(cycle) => cycle.apply(point),
            Perm::Product(product) => product.map.get(point).unwrap_or(point).clone(),
        }
    }

    /// The underlying point mapping, `None` for the identity.
    pub fn mapping(&self) -> Option<&FrozenMap<P>> {
        match self {
            Perm::Identity => None,
            Perm::Cycle(cycle) => Some(cycle.mapping()),
            Perm::Product(product) => Some(&product.map),
        }
    }

    /// Whether `point` is moved by this permutation.
    pub fn contains(&self, point: &P) -> bool {
        self.mapping().map_or(false, |map| map.contains_key(point))
    }

    /// Number of points moved by this permutation.
    pub fn len(&self) -> usize {
        self.mapping().map_or(0, FrozenMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterator over all points moved by this permutation.
    pub fn support(&self) -> impl Iterator<Item = &P> + '_ {
        self.mapping().into_iter().flat_map(FrozenMap::keys)
    }

    /// Iterator over all moved points together with their images.
    pub fn pairs(&self) -> impl Iterator<Item = (&P, &P)> + '_ {
        self.mapping().into_iter().flat_map(FrozenMap::iter)
    }

    /// The disjoint cycles of this permutation, ordered by their first point.
    pub fn orbits(&self) -> &[Cycle<P>] {
        match self {
            Perm::Identity => &[],
            Perm::Cycle(cycle) => slice::from_ref(cycle),
            Perm::Product(product) => &product.orbits,
        }
    }

    fn into_orbits(self) -> Vec<Cycle<P>> {
        match self {
            Perm::Identity => vec![],
            Perm::Cycle(cycle) => vec![cycle],
            Perm::Product(product) => product.orbits,
        }
    }

    /// The cycle containing a point, or the identity when the point is fixed.
    pub fn orbit(&self, point: &P) -> Perm<P> {
        self.orbits()
            .iter()
            .find(|orbit| orbit.contains(point))
            .map_or(Perm::Identity, |orbit| Perm::Cycle(orbit.clone()))
    }

    /// The multiplicative order, the least common multiple of all cycle lengths.
    pub fn order(&self) -> BigUint {
        match self {
            Perm::Identity => BigUint::one(),
            Perm::Cycle(cycle) => BigUint::from(cycle.order()),
            Perm::Product(product) => product.order.clone(),
        }
    }

    /// Composition `self ∘ other`, the permutation applying `other` first and `self` second.
    pub fn compose(&self, other: &Perm<P>) -> Perm<P> {
        if self.is_identity() {
            return other.clone();
        } else if other.is_identity() {
            return self.clone();
        }

        let pairs: Vec<(P, P)> = other
            .support()
            .chain(self.support().filter(|point| !other.contains(point)))
            .map(|point| (point.clone(), self.apply(&other.apply(point))))
            .collect();

        // Both operands are bijections, so is their composition
        Perm::from_pairs(pairs).expect("composition of permutations is injective")
    }

    /// A power of this permutation.
    ///
    /// Negative exponents are supported, computing powers of the inverse. Powers are computed
    /// cycle by cycle without repeated multiplication.
    pub fn pow<E>(&self, exponent: E) -> Perm<P>
    where
        E: Integer + Clone + ToPrimitive + FromPrimitive,
    {
        match self {
            Perm::Identity => Perm::Identity,
            Perm::Cycle(cycle) => cycle.pow(exponent),
            Perm::Product(product) => Perm::from_disjoint(
                product
                    .orbits
                    .iter()
                    .flat_map(|orbit| orbit.pow(exponent.clone()).into_orbits())
                    .collect(),
            ),
        }
    }

    /// The inverse permutation.
    pub fn inverse(&self) -> Perm<P> {
        self.pow(-1)
    }

    /// Decompose into transpositions whose product, applying the rightmost first, is `self`.
    pub fn transpositions(&self) -> Vec<Cycle<P>> {
        self.orbits()
            .iter()
            .flat_map(|orbit| orbit.transpositions())
            .collect()
    }
}

/// Walk the orbits of a mapping, failing when it is not a bijection on its keys.
fn decompose<P: Point>(map: &FrozenMap<P>) -> Result<Vec<Cycle<P>>, PermError> {
    let not_injective = || {
        debug!(?map, "rejecting non-injective mapping");
        PermError::NotInjective {
            mapping: format!("{:?}", map),
        }
    };

    let mut seen: HashSet<&P> = HashSet::with_capacity(map.len());
    let mut orbits = vec![];

    for first in map.keys() {
        if !seen.insert(first) {
            continue;
        }
        let mut orbit = vec![first.clone()];
        let mut point = first;
        loop {
            let next = map.get(point).ok_or_else(not_injective)?;
            if next == first {
                break;
            }
            if !map.contains_key(next) || !seen.insert(next) {
                return Err(not_injective());
            }
            orbit.push(next.clone());
            point = next;
        }
        // Fixed points were never stored, so every orbit has at least two points
        orbits.push(Cycle::from_orbit(orbit));
    }

    Ok(orbits)
}

impl<P: Point> Default for Perm<P> {
    fn default() -> Perm<P> {
        Perm::Identity
    }
}

impl<P: Point> From<Cycle<P>> for Perm<P> {
    fn from(cycle: Cycle<P>) -> Perm<P> {
        Perm::Cycle(cycle)
    }
}

/// Application of a permutation to a point.
impl<P: Point> LeftAction<P> for Perm<P> {
    fn left_apply(&self, point: P) -> P {
        self.apply(&point)
    }
}

/// Composition of a permutation on the left, `self ∘ perm`.
impl<P: Point> LeftAction<Perm<P>> for Perm<P> {
    fn left_apply(&self, perm: Perm<P>) -> Perm<P> {
        self.compose(&perm)
    }
}

/// Composition of a permutation on the right, `perm ∘ self`.
impl<P: Point> RightAction<Perm<P>> for Perm<P> {
    fn right_apply(&self, perm: Perm<P>) -> Perm<P> {
        perm.compose(self)
    }
}

impl<'a, P: Point> Mul<&'a Perm<P>> for &'a Perm<P> {
    type Output = Perm<P>;

    fn mul(self, other: &'a Perm<P>) -> Perm<P> {
        self.compose(other)
    }
}

impl<P: Point> Mul<Perm<P>> for Perm<P> {
    type Output = Perm<P>;

    fn mul(self, other: Perm<P>) -> Perm<P> {
        self.compose(&other)
    }
}

impl<'a, P: Point> Mul<&'a Perm<P>> for Perm<P> {
    type Output = Perm<P>;

    fn mul(self, other: &'a Perm<P>) -> Perm<P> {
        self.compose(other)
    }
}

impl<P: Point> fmt::Display for Perm<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("()");
        }
        for orbit in self.orbits() {
            fmt::Display::fmt(orbit, f)?;
        }
        Ok(())
    }
}

impl<P: Point> fmt::Debug for Perm<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<P: Point> fmt::Debug for Product<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for orbit in self.orbits.iter() {
            fmt::Display::fmt(orbit, f)?;
        }
        Ok(())
    }
}
