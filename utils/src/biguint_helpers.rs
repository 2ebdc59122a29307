//! Small extensions to [`BigUint`] used when reporting limb and field
//! range errors.
use num_bigint::BigUint;
use num_traits::Zero;

/// Helpers for BigUint
pub trait BigUintHelpers<Rhs = Self> {
    /// Returns the minimum number of bits required to represent a BigUint
    /// As opposed to BigUint::bits, this function returns 1 for the input zero
    fn bitlen(&self) -> u64;

    /// Returns true if the value is a power of two (zero is not)
    fn is_power_of_two(&self) -> bool;
}

impl BigUintHelpers for BigUint {
    fn bitlen(&self) -> u64 {
        if self.is_zero() {
            1
        } else {
            self.bits()
        }
    }

    fn is_power_of_two(&self) -> bool {
        self.count_ones() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitlen() {
        assert_eq!(BigUint::from(0u32).bitlen(), 1);
        assert_eq!(BigUint::from(1u32).bitlen(), 1);
        assert_eq!(BigUint::from(255u32).bitlen(), 8);
        assert_eq!((BigUint::from(1u32) << 96u32).bitlen(), 97);
    }

    #[test]
    fn test_is_power_of_two() {
        assert!(!BigUint::from(0u32).is_power_of_two());
        assert!(BigUint::from(1u32).is_power_of_two());
        assert!((BigUint::from(1u32) << 96u32).is_power_of_two());
        assert!(!BigUint::from(10u32).is_power_of_two());
    }
}
