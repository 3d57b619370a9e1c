use crate::path::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("parameter name in segment '{segment}' is empty")]
    ParameterNameEmpty { segment: String },
    #[error("invalid constraint for parameter '{name}' in '{pattern}': {error}")]
    RegexConstraintInvalid {
        pattern: String,
        name: String,
        error: String,
    },
    #[error("constraint for parameter '{name}' is {len} bytes long (limit {limit})")]
    ConstraintTooLong {
        name: String,
        len: usize,
        limit: usize,
    },
    #[error(transparent)]
    Path(#[from] PathError),
}

pub type PatternResult<T> = Result<T, PatternError>;
