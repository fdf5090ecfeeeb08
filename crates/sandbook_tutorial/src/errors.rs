use std::io;

#[derive(Debug, thiserror::Error)]
pub enum TutorialError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tutorial has no steps")]
    NoSteps,
}

pub type TutorialResult<T> = Result<T, TutorialError>;
