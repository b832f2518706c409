use thiserror::Error;

/// Failure reported by a [`crate::TitleGenerator`].
#[derive(Debug, Error)]
#[error("title generator failed: {0}")]
pub struct GeneratorError(pub String);

#[derive(Debug, Error)]
pub enum RankError {
    /// The request names a channel absent from the profile snapshot.
    #[error("unknown channel_id: {0}")]
    UnknownChannel(String),

    #[error("invalid ranking request: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}
