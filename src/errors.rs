use crate::pattern::PatternError;
use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{path}'")]
    AddWhileSealed { path: String },
    #[error("router is sealed; cannot replace the {fallback} handler")]
    FallbackWhileSealed { fallback: &'static str },
    #[error("router is not sealed; cannot dispatch requests")]
    NotSealed,
    #[error("'{method}' is not a valid HTTP method name")]
    InvalidMethod { method: String },
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type RouterResult<T> = Result<T, RouterError>;
