//! Off-circuit emulation of the sequential Poseidon transcript a
//! Poseidon-based verifier uses to derive its Fiat-Shamir challenges.
//!
//! Values are absorbed one at a time. Each absorption splits the value into
//! four limbs, packs them into two lanes of a width-3 state and applies the
//! permutation once, so challenges computed here match, step for step, the
//! ones the verifier circuit derives on its own.
//!
//! The permutation is supplied by the caller through the [`Permutation`]
//! trait. Closures and functions over a width-3 state implement it:
//!
//! ```rust
//! use poseidon_transcript::{Felt252, Transcript};
//!
//! // stand-in for the real round function
//! let permutation = |s: [Felt252; 3]| [s[0] + s[1], s[1] + s[2], s[2] + s[0]];
//!
//! let mut transcript: Transcript<Felt252, _> = Transcript::new(permutation, 42u32).unwrap();
//! transcript
//!     .absorb_many(&[Felt252::from(1u64), Felt252::from(2u64)], None)
//!     .unwrap();
//! let _alpha = transcript.draw_rlc_coefficient();
//!
//! assert_eq!(transcript.permutation_count(), 3);
//! assert_eq!(transcript.challenge_log(), &[2]);
//! ```

pub mod constants;
pub mod error;
pub mod field;
pub mod permutation;
pub mod transcript;

pub use constants::{Base96, LimbConstants, N_LIMBS, SPONGE_WIDTH};
pub use error::{Result, TranscriptError};
pub use field::Felt252;
pub use permutation::{Permutation, PermutationTrace, RecordingPermutation};
pub use transcript::Transcript;
