//! Precomputed per-lane polynomial partial sums over all originals — the
//! piece that turns a single `Encode` call from O(N) into
//! O(N / L + L*K) work. Built once in `LaneSumTable::build`, never mutated
//! afterward.

use crate::error::FecError;
use crate::gf256;
use crate::tables::column_value;
use crate::window::Window;
use crate::{try_zeroed, COLUMN_LANE_COUNT, COLUMN_SUM_COUNT};

/// `LaneSums[lane][k]` = XOR over columns `c ≡ lane (mod L)` of
/// `CX(c)^k * Original[c]`, for `k` in `0..K`.
pub struct LaneSumTable {
    symbol_len: usize,
    sums: [[Vec<u8>; COLUMN_SUM_COUNT]; COLUMN_LANE_COUNT],
}

impl LaneSumTable {
    pub fn build(window: &Window<'_>) -> Result<Self, FecError> {
        let s = window.symbol_len();
        let mut sums = alloc_cells(s)?;

        for c in 0..window.n() {
            let lane = c % COLUMN_LANE_COUNT;
            let cx = column_value(c as u64);
            let cx2 = gf256::sqr(cx);
            let original = window.original(c);
            let len = original.len();

            gf256::add(&mut sums[lane][0][..len], original);
            gf256::muladd(&mut sums[lane][1][..len], cx, original);
            gf256::muladd(&mut sums[lane][2][..len], cx2, original);
        }

        tracing::debug!(lanes = COLUMN_LANE_COUNT, k = COLUMN_SUM_COUNT, s, "lane sum table built");

        Ok(Self { symbol_len: s, sums })
    }

    #[inline]
    pub fn symbol_len(&self) -> usize {
        self.symbol_len
    }

    #[inline]
    pub fn cell(&self, lane: usize, k: usize) -> &[u8] {
        &self.sums[lane][k]
    }
}

fn alloc_cells(
    s: usize,
) -> Result<[[Vec<u8>; COLUMN_SUM_COUNT]; COLUMN_LANE_COUNT], FecError> {
    let mut lanes: Vec<[Vec<u8>; COLUMN_SUM_COUNT]> = Vec::with_capacity(COLUMN_LANE_COUNT);
    for _ in 0..COLUMN_LANE_COUNT {
        let mut cells: Vec<Vec<u8>> = Vec::with_capacity(COLUMN_SUM_COUNT);
        for _ in 0..COLUMN_SUM_COUNT {
            cells.push(try_zeroed(s)?);
        }
        lanes.push(cells.try_into().unwrap_or_else(|_| unreachable!()));
    }
    lanes.try_into().unwrap_or_else(|_| unreachable!())
}
