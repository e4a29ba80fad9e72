use num_traits::PrimInt;

pub trait CheckedCeilDiv: Sized {
    /// Division rounded up, for positive divisors. `None` on a zero divisor
    /// or overflow.
    fn checked_ceil_div(&self, rhs: Self) -> Option<Self>;
}

impl<T: PrimInt> CheckedCeilDiv for T {
    #[track_caller]
    #[inline]
    fn checked_ceil_div(&self, rhs: T) -> Option<T> {
        let quotient = self.checked_div(&rhs)?;

        // `checked_div` already rejected a zero divisor and `MIN / -1`.
        let remainder = *self % rhs;

        if remainder > T::zero() {
            quotient.checked_add(&T::one())
        } else {
            Some(quotient)
        }
    }
}

#[cfg(test)]
mod test {
    use super::CheckedCeilDiv;

    #[test]
    fn rounds_up_on_remainder() {
        assert_eq!((155_i128).checked_ceil_div(8), Some(20));
        assert_eq!((160_i128).checked_ceil_div(8), Some(20));
        assert_eq!((0_i128).checked_ceil_div(8), Some(0));
        assert_eq!((1_i128).checked_ceil_div(0), None);
        assert_eq!(i128::MAX.checked_ceil_div(1), Some(i128::MAX));
    }
}
