use thiserror::Error;

/// Result taxonomy for the encoder: `Ok` subsumes the spec's `Success`
/// state, these two variants cover `InvalidInput` and `OutOfMemory`.
#[derive(Debug, Error)]
pub enum FecError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("allocation failed while building the lane sum table")]
    OutOfMemory,
}
