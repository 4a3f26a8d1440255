use thiserror::Error;

pub type SvResult<T> = Result<T, SvError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SvError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Presentation node {slot} is no longer attached")]
    StaleNode { slot: String },

    #[error("No presentation node at path {path}")]
    PathNotFound { path: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
