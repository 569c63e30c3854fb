use thiserror::Error;

/// Caller errors. Environment inadmissibility is not an error; see
/// [`crate::Inadmissible`].
#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("invalid backdrop options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
