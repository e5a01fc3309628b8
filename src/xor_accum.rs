//! Batched XOR accumulator.
//!
//! Coalesces several source buffers into one destination, deferring the
//! actual XOR passes to `Add` calls in groups of [`BATCH`]. This is a
//! performance optimization in the spirit of `pool.rs`'s slab-based
//! deferred bookkeeping in the teacher crate — a correct implementation may
//! equally well XOR one source at a time, and the two forms must produce
//! identical output.

use crate::gf256;

/// Pending-source batch size before a flush. 4-8 is the typical range named
/// in the spec; 4 keeps the pending buffer small on the stack-sized case.
const BATCH: usize = 4;

/// Batches XOR-adds into `dst`. Each `add(src)` XORs into `dst[..src.len()]`
/// only — bytes of `dst` beyond `src.len()` are left untouched, which is
/// what gives the final-column tail its "never touched" guarantee for free.
pub struct XorAccumulator<'d, 'a> {
    dst: &'d mut [u8],
    pending: Vec<&'a [u8]>,
}

impl<'d, 'a> XorAccumulator<'d, 'a> {
    pub fn new(dst: &'d mut [u8]) -> Self {
        Self {
            dst,
            pending: Vec::with_capacity(BATCH),
        }
    }

    /// Enqueue a source buffer. Flushes automatically once `BATCH` sources
    /// are pending.
    pub fn add(&mut self, src: &'a [u8]) {
        self.pending.push(src);
        if self.pending.len() == BATCH {
            self.flush();
        }
    }

    fn flush(&mut self) {
        for src in self.pending.drain(..) {
            gf256::add(&mut self.dst[..src.len()], src);
        }
    }

    /// Flush any remaining pending sources. Called automatically on drop,
    /// but exposed so callers can force ordering before reading `dst`
    /// through another reference.
    pub fn finalize(&mut self) {
        if !self.pending.is_empty() {
            self.flush();
        }
    }
}

impl Drop for XorAccumulator<'_, '_> {
    fn drop(&mut self) {
        self.finalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_sequential_loop() {
        let sources: Vec<Vec<u8>> = (0..10u8).map(|i| vec![i; 6]).collect();

        let mut batched = vec![0xFFu8; 6];
        {
            let mut acc = XorAccumulator::new(&mut batched);
            for s in &sources {
                acc.add(s);
            }
        }

        let mut sequential = vec![0xFFu8; 6];
        for s in &sources {
            gf256::add(&mut sequential, s);
        }

        assert_eq!(batched, sequential);
    }

    #[test]
    fn leaves_tail_untouched_for_short_sources() {
        let mut dst = vec![0xAAu8; 8];
        {
            let mut acc = XorAccumulator::new(&mut dst);
            acc.add(&[1u8, 2, 3]);
        }
        assert_eq!(&dst[..3], &[1u8 ^ 0xAA, 2 ^ 0xAA, 3 ^ 0xAA]);
        assert_eq!(&dst[3..], &[0xAAu8; 5]);
    }

    #[test]
    fn finalize_flushes_partial_batch() {
        let mut dst = vec![0u8; 4];
        let mut acc = XorAccumulator::new(&mut dst);
        acc.add(&[1, 1, 1, 1]);
        acc.add(&[2, 2, 2, 2]);
        acc.finalize();
        drop(acc);
        assert_eq!(dst, vec![3, 3, 3, 3]);
    }
}
