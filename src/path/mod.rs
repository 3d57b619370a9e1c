mod error;
mod normalize;

pub use error::PathError;
pub(crate) use error::PathResult;
pub use normalize::{split_segments, validate_pattern_path};
