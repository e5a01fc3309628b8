//! The two-sum convolutional combiner: `Encoder::encode` is the per-row
//! algorithm that produces one recovery symbol from the LDPC pair overlay
//! plus the precomputed lane sums.

use crate::error::FecError;
use crate::gf256;
use crate::lanesum::LaneSumTable;
use crate::prng::RowPrng;
use crate::tables::{row_opcode, row_value};
use crate::window::Window;
use crate::xor_accum::XorAccumulator;
use crate::{try_zeroed, COLUMN_LANE_COUNT, COLUMN_SUM_COUNT, PAIR_ADD_RATE};

/// A generated recovery symbol. Borrows the encoder's internal `Sum`
/// buffer — the borrow checker enforces what the spec calls "valid until
/// the next mutating operation": a second `encode()` call cannot happen
/// while this value is alive, since both require `&mut Encoder`.
pub struct RecoverySymbol<'s> {
    data: &'s [u8],
    row: u64,
}

impl<'s> RecoverySymbol<'s> {
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.data
    }

    #[inline]
    pub fn row(&self) -> u64 {
        self.row
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Encoder for a fixed window of `N` originals. Construction runs
/// `Initialize` (builds the lane sum table); `encode` never allocates.
pub struct Encoder<'a> {
    window: Window<'a>,
    lanes: LaneSumTable,
    sum: Vec<u8>,
    product: Vec<u8>,
}

impl<'a> Encoder<'a> {
    pub fn new(window: Window<'a>) -> Result<Self, FecError> {
        let lanes = LaneSumTable::build(&window)?;
        let s = window.symbol_len();
        let sum = try_zeroed(s)?;
        let product = try_zeroed(s)?;

        tracing::debug!(n = window.n(), s, "encoder ready");

        Ok(Self {
            window,
            lanes,
            sum,
            product,
        })
    }

    #[inline]
    pub fn window(&self) -> &Window<'a> {
        &self.window
    }

    /// Generates one recovery symbol for `row`. Pure with respect to
    /// `(row, originals)`: repeated calls with the same `row` against
    /// unchanged originals yield byte-identical output.
    pub fn encode(&mut self, row: u64) -> RecoverySymbol<'_> {
        let n = self.window.n() as u64;

        self.sum.fill(0);
        self.product.fill(0);

        let mut prng = RowPrng::new(row, n);
        let pair_count = (n + PAIR_ADD_RATE - 1) / PAIR_ADD_RATE;

        for _ in 0..pair_count {
            let e1 = (prng.next_u32() as u64 % n) as usize;
            let e_rx = (prng.next_u32() as u64 % n) as usize;

            let o1 = self.window.original(e1);
            gf256::add(&mut self.sum[..o1.len()], o1);

            let o2 = self.window.original(e_rx);
            gf256::add(&mut self.product[..o2.len()], o2);
        }

        for lane in 0..COLUMN_LANE_COUNT {
            let opcode = row_opcode(lane as u8, row);

            {
                let mut acc = XorAccumulator::new(&mut self.sum);
                for k in 0..COLUMN_SUM_COUNT {
                    if opcode & (1 << k) != 0 {
                        acc.add(self.lanes.cell(lane, k));
                    }
                }
            }
            {
                let mut acc = XorAccumulator::new(&mut self.product);
                for k in 0..COLUMN_SUM_COUNT {
                    if opcode & (1 << (COLUMN_SUM_COUNT + k)) != 0 {
                        acc.add(self.lanes.cell(lane, k));
                    }
                }
            }
        }

        let rx = row_value(row);
        gf256::muladd(&mut self.sum, rx, &self.product);

        tracing::trace!(row, "encoded recovery symbol");

        RecoverySymbol {
            data: &self.sum,
            row,
        }
    }
}
