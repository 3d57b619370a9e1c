mod error;
mod parser;
mod segment;

pub use error::{PatternError, PatternResult};
pub use parser::{ParsedPattern, parse_pattern};
pub use segment::{
    CONSTRAINT_DELIMITER, PARAM_PREFIX, ParamConstraint, SegmentPattern, WILDCARD_TOKEN,
};
