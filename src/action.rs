//! Group actions.

/// Left action on `T`.
///
/// Elements of implementing types act on `T` values on the left. For permutations this is
/// application to a point, and composition `self ∘ value` for other permutations.
pub trait LeftAction<T> {
    /// Act on a value on the left.
    fn left_apply(&self, value: T) -> T;

    /// Act on a value, in place, on the left.
    fn left_apply_to(&self, value: &mut T)
    where
        T: Clone,
    {
        *value = self.left_apply(value.clone());
    }
}

/// Right action on `T`.
///
/// Elements of implementing types act on `T` values on the right. For permutations this is
/// composition `value ∘ self`.
pub trait RightAction<T> {
    /// Act on a value on the right.
    fn right_apply(&self, value: T) -> T;

    /// Act on a value, in place, on the right.
    fn right_apply_to(&self, value: &mut T)
    where
        T: Clone,
    {
        *value = self.right_apply(value.clone());
    }
}
