//! The 252-bit prime field `p = 2^251 + 17 * 2^192 + 1` in which the
//! VM-side sequential Poseidon hash is computed.

use ark_ff::fields::{Fp256, MontBackend, MontConfig};

#[derive(MontConfig)]
#[modulus = "3618502788666131213697322783095070105623107215331596699973092056135872020481"]
#[generator = "3"]
pub struct Felt252Config;
pub type Felt252 = Fp256<MontBackend<Felt252Config, 4>>;
