/// Coarse failure classes surfaced to callers.
///
/// API crates map these onto transport status codes; the core crate never depends on HTTP types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller did not supply required input.
    MissingInput,
    /// The requested record does not exist or could not be read.
    NotFound,
    /// Anything else.
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum PitchError {
    #[error("Pitch ID is required")]
    MissingPitchId,
    #[error("pitch not found: {0}")]
    NotFound(String),
    #[error("datastore query failed: {0}")]
    Store(#[from] sqlx::Error),
    #[error("failed to deserialize pitch data: {0}")]
    Deserialization(serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write file: {0}")]
    FileWrite(std::io::Error),
}

impl PitchError {
    /// Classifies the error.
    ///
    /// Datastore failures are reported as `NotFound`: a lookup that cannot complete is
    /// indistinguishable from a missing record for the caller.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PitchError::MissingPitchId => ErrorKind::MissingInput,
            PitchError::NotFound(_) | PitchError::Store(_) => ErrorKind::NotFound,
            PitchError::Deserialization(_)
            | PitchError::InvalidInput(_)
            | PitchError::FileRead(_)
            | PitchError::FileWrite(_) => ErrorKind::Internal,
        }
    }
}

pub type PitchResult<T> = std::result::Result<T, PitchError>;
