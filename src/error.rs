use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Embedded site content did not match the expected shape.
    #[error("malformed site content: {0}")]
    Content(#[from] serde_json::Error),

    #[error("invalid motion config: {reason}")]
    InvalidMotion { reason: String },

    #[error("no project with id {0:?}")]
    UnknownProject(String),

    #[error("no info entry with id {0:?}")]
    UnknownInfo(String),
}

impl Error {
    pub fn invalid_motion(reason: impl Into<String>) -> Self {
        Self::InvalidMotion {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
