//! Conversions between `ark_ff` prime field elements and [`BigUint`].

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use thiserror::Error;

use crate::biguint_helpers::BigUintHelpers;

// Field helpers error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldHelpersError {
    #[error("a value of {bits} bits is not below the field modulus")]
    OutOfRange { bits: u64 },
}

pub type Result<T> = std::result::Result<T, FieldHelpersError>;

/// Field element helpers
pub trait FieldHelpers<F> {
    /// Checked conversion from a big unsigned integer, no reduction
    fn from_biguint(big: &BigUint) -> Result<F>;

    /// Canonical (non-Montgomery) integer representation
    fn to_biguint(&self) -> BigUint;

    /// Get the modulus as `BigUint`
    fn modulus_biguint() -> BigUint;
}

impl<F: PrimeField> FieldHelpers<F> for F {
    fn from_biguint(big: &BigUint) -> Result<F> {
        if *big >= F::modulus_biguint() {
            return Err(FieldHelpersError::OutOfRange { bits: big.bitlen() });
        }
        Ok(F::from_le_bytes_mod_order(&big.to_bytes_le()))
    }

    fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.into_bigint().to_bytes_le())
    }

    fn modulus_biguint() -> BigUint {
        BigUint::from_bytes_le(&F::MODULUS.to_bytes_le())
    }
}

/// Field conversions for big unsigned integers
pub trait BigUintFieldHelpers {
    /// Checked conversion into a field element
    fn to_field<F: PrimeField>(&self) -> Result<F>;

    /// Conversion into a field element, reducing modulo the field's modulus
    fn to_field_reduced<F: PrimeField>(&self) -> F;
}

impl BigUintFieldHelpers for BigUint {
    fn to_field<F: PrimeField>(&self) -> Result<F> {
        F::from_biguint(self)
    }

    fn to_field_reduced<F: PrimeField>(&self) -> F {
        F::from_le_bytes_mod_order(&self.to_bytes_le())
    }
}
