//! Domain elements.
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// An element of the set a permutation acts on.
///
/// Points only need equality and hashing. When a type also has a total order, `canonical_cmp`
/// exposes it and permutations use it to pick a canonical rotation for each cycle and a canonical
/// order for the cycles of a product. Types without an order return `None`, in which case the
/// order in which cycles were written or discovered is kept.
pub trait Point: Clone + Eq + Hash + fmt::Debug {
    /// Compare two points under the type's total order, if there is one.
    fn canonical_cmp(&self, other: &Self) -> Option<Ordering>;
}

macro_rules! impl_ordered_point {
    ($($t:ty),*) => {
        $(
            impl Point for $t {
                #[inline]
                fn canonical_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }
        )*
    };
}

impl_ordered_point!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_ordered_point!(char, bool, String);

impl<'a> Point for &'a str {
    #[inline]
    fn canonical_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Point, B: Point> Point for (A, B) {
    fn canonical_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.canonical_cmp(&other.0)? {
            Ordering::Equal => self.1.canonical_cmp(&other.1),
            ord => Some(ord),
        }
    }
}

impl<A: Point, B: Point, C: Point> Point for (A, B, C) {
    fn canonical_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.canonical_cmp(&other.0)? {
            Ordering::Equal => match self.1.canonical_cmp(&other.1)? {
                Ordering::Equal => self.2.canonical_cmp(&other.2),
                ord => Some(ord),
            },
            ord => Some(ord),
        }
    }
}

/// Wrapper that turns any hashable value into a point without an order.
///
/// Cycles over `Unordered` points keep the rotation they were constructed with and products keep
/// their cycles in discovery order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unordered<T>(pub T);

impl<T> Point for Unordered<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    #[inline]
    fn canonical_cmp(&self, _other: &Self) -> Option<Ordering> {
        None
    }
}

impl<T: fmt::Debug> fmt::Debug for Unordered<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Position of the least point in `points`.
///
/// Returns `None` for an empty slice or when the points are not comparable.
pub(crate) fn min_position<P: Point>(points: &[P]) -> Option<usize> {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if p.canonical_cmp(&points[best])? == Ordering::Less {
            best = i;
        }
    }
    if points.is_empty() {
        None
    } else {
        Some(best)
    }
}

/// Stable sort by a point-valued key, leaving `items` untouched when any two keys don't compare.
pub(crate) fn sort_by_point<T, P, F>(items: &mut Vec<T>, key: F)
where
    P: Point,
    F: Fn(&T) -> &P,
{
    let mut comparable = true;
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| {
        key(&items[a])
            .canonical_cmp(key(&items[b]))
            .unwrap_or_else(|| {
                comparable = false;
                Ordering::Equal
            })
    });
    if !comparable {
        return;
    }

    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(indices.into_iter().filter_map(|i| slots[i].take()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_position_ordered() {
        assert_eq!(min_position(&[3, 1, 2]), Some(1));
        assert_eq!(min_position(&["b", "a"]), Some(1));
        assert_eq!(min_position::<u32>(&[]), None);
    }

    #[test]
    fn min_position_unordered() {
        assert_eq!(min_position(&[Unordered(3), Unordered(1)]), None);
        assert_eq!(min_position(&[Unordered(3)]), Some(0));
    }

    #[test]
    fn tuples_compare_lexicographically() {
        assert_eq!((1, 'b').canonical_cmp(&(1, 'a')), Some(Ordering::Greater));
        assert_eq!(
            (Unordered(1), 2).canonical_cmp(&(Unordered(1), 2)),
            None
        );
    }

    #[test]
    fn sort_keeps_order_when_incomparable() {
        let mut ordered = vec![(3, 'c'), (1, 'a'), (2, 'b')];
        sort_by_point(&mut ordered, |x| &x.0);
        assert_eq!(ordered, vec![(1, 'a'), (2, 'b'), (3, 'c')]);

        let mut unordered = vec![Unordered(3), Unordered(1), Unordered(2)];
        sort_by_point(&mut unordered, |x| x);
        assert_eq!(unordered, vec![Unordered(3), Unordered(1), Unordered(2)]);
    }
}
