//! Helpers shared by the transcript crates: converting between big
//! unsigned integers and `ark_ff` prime fields, and splitting integers that
//! are too wide for a single field element into fixed-width limbs.

pub mod biguint_helpers;
pub mod field_helpers;
pub mod limbs;

pub use biguint_helpers::BigUintHelpers;
pub use field_helpers::{BigUintFieldHelpers, FieldHelpers};
pub use limbs::{combine, split, LimbError, LimbSplitter, RadixSplitter};
