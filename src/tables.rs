//! Deterministic (row, column) → GF(256) value mappings and the row opcode
//! bitmask. These are wire-format constants: fixed for all time, covered by
//! the reference vectors in this module's tests and in
//! `tests/reference_vectors.rs`.

use crate::gf256;
use crate::prng::RowPrng;

/// Salts used only to decorrelate the opcode PRNG stream from the row-value
/// stream; not a security boundary, just mixing diversity.
const OPCODE_ROW_SALT: u64 = 0xA5A5_A5A5_A5A5_A5A5;
const OPCODE_LANE_SALT: u64 = 0xD00D_0000;

/// `GetColumnValue(column) -> CX`: nonzero for every valid column, and part
/// of the lane-sum polynomial basis (`CX(c)^k` for `k` in `0..K`).
#[inline]
pub fn column_value(column: u64) -> u8 {
    gf256::exp(column as usize)
}

/// `GetRowValue(row) -> RX`: the coefficient blending `Product` into `Sum`.
#[inline]
pub fn row_value(row: u64) -> u8 {
    gf256::exp(((row.wrapping_mul(7).wrapping_add(3)) % 255) as usize)
}

/// `GetRowOpcode(lane, row)`: low 6 bits select which of the 2*K = 6 lane-sum
/// cells mix into `Sum` (bits `0..K`) and `Product` (bits `K..2K`).
#[inline]
pub fn row_opcode(lane: u8, row: u64) -> u8 {
    let mut prng = RowPrng::new(row ^ OPCODE_ROW_SALT, (lane as u64) | OPCODE_LANE_SALT);
    (prng.next_u32() & 0x3F) as u8
}
