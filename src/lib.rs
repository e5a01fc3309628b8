//! # lanefec
//!
//! A convolutional/fountain-style block FEC encoder over GF(256). Given a
//! fixed-size window of `N` equal-length original symbols, [`Encoder`]
//! produces an unlimited stream of recovery symbols, each generated on
//! demand from a pseudo-random recipe keyed by a row index rather than
//! precomputed as a full parity matrix.
//!
//! ## Crate structure
//!
//! - [`gf256`] — GF(256) byte arithmetic (add, mul-add, square) over the
//!   Rijndael polynomial
//! - [`prng`] — small-state deterministic generator seeded by `(row, count)`
//! - [`xor_accum`] — batched XOR accumulator
//! - [`window`] — window parameter holder (N, S, F, borrowed originals)
//! - [`lanesum`] — precomputed per-lane polynomial partial sums
//! - [`tables`] — the deterministic column/row value and row opcode mappings
//! - [`encoder`] — `Encoder::encode`, the two-sum convolutional combiner
//!
//! The decoder's Gaussian elimination pipeline, the allocator, and a C-ABI
//! lifecycle layer are explicitly out of scope — see `SPEC_FULL.md`.

pub mod encoder;
pub mod error;
pub mod gf256;
pub mod lanesum;
pub mod prng;
pub mod tables;
pub mod window;
pub mod xor_accum;

pub use encoder::{Encoder, RecoverySymbol};
pub use error::FecError;
pub use window::Window;

/// Number of column-residue lanes (`L`). Part of the external contract —
/// changing it breaks interoperability with any other implementation of
/// this row recipe.
pub const COLUMN_LANE_COUNT: usize = 8;

/// Polynomial degrees per lane, `k` in `0..K` (`K`).
pub const COLUMN_SUM_COUNT: usize = 3;

/// Originals per LDPC pair-add.
pub const PAIR_ADD_RATE: u64 = 16;

/// Fallibly allocates an `s`-byte zero-filled buffer, surfacing allocation
/// failure as [`FecError::OutOfMemory`] instead of aborting.
pub(crate) fn try_zeroed(s: usize) -> Result<Vec<u8>, FecError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(s).map_err(|_| FecError::OutOfMemory)?;
    buf.resize(s, 0);
    Ok(buf)
}
