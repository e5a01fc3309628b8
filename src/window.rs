//! Parameter holder for a fixed-size encoding window: input count `N`,
//! symbol byte length `S`, final-column short length `F`, and the borrowed
//! original data pointers. Grounded in `strata-transport::sender`'s
//! config-validation style (`SenderConfig`), swapped for `Result` returns
//! instead of `assert!`.

use crate::error::FecError;

/// Borrowed window of `N` original symbols. The encoder never copies this
/// memory; `'a` ties the window (and anything built from it) to the
/// caller-supplied buffers' lifetime.
pub struct Window<'a> {
    n: usize,
    s: usize,
    f: usize,
    originals: Vec<&'a [u8]>,
}

impl<'a> Window<'a> {
    /// Validates and constructs a window.
    ///
    /// `total_bytes` is the sum of all original lengths; `S = ceil(total_bytes / N)`
    /// and `F = total_bytes - (N-1)*S` are derived from it. Every original
    /// except the last must be exactly `S` bytes; the last must be exactly
    /// `F` bytes (Rust has no null slices, so the spec's null-pointer check
    /// becomes this length-shape validation instead).
    pub fn new(originals: Vec<&'a [u8]>, total_bytes: usize) -> Result<Self, FecError> {
        let n = originals.len();
        if n == 0 {
            return Err(FecError::InvalidInput("window must have at least one original"));
        }
        if total_bytes < n {
            return Err(FecError::InvalidInput("total_bytes must be >= N"));
        }

        let s = total_bytes.div_ceil(n);
        let f = total_bytes - (n - 1) * s;
        debug_assert!(f >= 1 && f <= s);

        for (c, original) in originals.iter().enumerate() {
            let expected = if c == n - 1 { f } else { s };
            if original.len() != expected {
                return Err(FecError::InvalidInput(
                    "original length does not match the derived window shape",
                ));
            }
        }

        tracing::debug!(n, s, f, "window initialized");

        Ok(Self { n, s, f, originals })
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn symbol_len(&self) -> usize {
        self.s
    }

    #[inline]
    pub fn final_len(&self) -> usize {
        self.f
    }

    #[inline]
    pub fn is_final_column(&self, c: usize) -> bool {
        c == self.n - 1
    }

    /// The borrowed data for column `c` — `S` bytes, or `F` bytes for the
    /// final column.
    #[inline]
    pub fn original(&self, c: usize) -> &'a [u8] {
        self.originals[c]
    }
}
