//! Integer utilities used for orders and powers.
use num_integer::Integer;

/// Greatest common divisor of all values.
///
/// Folds over an accumulator starting at zero, so the gcd of an empty sequence is 0.
pub fn gcd<I, T>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Integer,
{
    values.into_iter().fold(T::zero(), |acc, value| acc.gcd(&value))
}

/// Least common multiple of all values.
///
/// The lcm of an empty sequence is 1. Use an arbitrary precision `T` such as
/// [`BigUint`][num_bigint::BigUint] when the result may not fit a machine integer.
pub fn lcm<I, T>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Integer + Clone,
{
    values.into_iter().fold(T::one(), |acc, value| {
        let divisor = value.gcd(&acc);
        if divisor.is_zero() {
            return T::zero();
        }
        acc * (value / divisor)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::BigUint;
    use proptest::prelude::*;

    #[test]
    fn empty_sequences() {
        assert_eq!(gcd(Vec::<u64>::new()), 0);
        assert_eq!(lcm(Vec::<u64>::new()), 1);
    }

    #[test]
    fn small_values() {
        assert_eq!(gcd(vec![12u32, 18, 30]), 6);
        assert_eq!(gcd(vec![7u32, 0]), 7);
        assert_eq!(lcm(vec![2u32, 3]), 6);
        assert_eq!(lcm(vec![4u32, 6, 10]), 60);
        assert_eq!(lcm(vec![5u32, 0]), 0);
    }

    #[test]
    fn lcm_beyond_u64() {
        let primes = [
            101u32, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173,
        ];
        let big: BigUint = lcm(primes.iter().map(|&p| BigUint::from(p)));
        let expected = primes
            .iter()
            .fold(BigUint::from(1u32), |acc, &p| acc * BigUint::from(p));
        assert_eq!(big, expected);
        assert!(big > BigUint::from(u64::MAX));
    }

    proptest! {
        #[test]
        fn gcd_divides_and_lcm_is_multiple(values in prop::collection::vec(1..10_000u64, 1..8)) {
            let g = gcd(values.clone());
            let l: BigUint = lcm(values.iter().map(|&v| BigUint::from(v)));
            for &v in values.iter() {
                prop_assert_eq!(v % g, 0);
                prop_assert_eq!(&l % BigUint::from(v), BigUint::from(0u32));
            }
        }
    }
}
