use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
    #[error("unknown resource: {0:?} (expected students, teachers, courses or enrollments)")]
    UnknownResource(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
