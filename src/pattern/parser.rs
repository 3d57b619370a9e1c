use crate::path::{split_segments, validate_pattern_path};
use crate::registry::PatternRegistry;

use super::{
    CONSTRAINT_DELIMITER, PARAM_PREFIX, ParamConstraint, PatternError, PatternResult,
    SegmentPattern, WILDCARD_TOKEN,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    pub segments: Vec<SegmentPattern>,
    /// Segments written after the wildcard marker; they never take part in
    /// matching.
    pub ignored_after_wildcard: usize,
}

/// Parses a route pattern into segment patterns, compiling every constraint
/// through `registry`.
///
/// Nothing is inserted anywhere: a pattern with a broken constraint fails
/// here, before any tree is touched.
pub fn parse_pattern(
    pattern: &str,
    registry: &PatternRegistry,
    max_constraint_len: usize,
) -> PatternResult<ParsedPattern> {
    validate_pattern_path(pattern)?;

    let raw_segments = split_segments(pattern);
    let total = raw_segments.len();
    let mut segments = Vec::with_capacity(total);
    let mut ignored_after_wildcard = 0usize;

    for (idx, segment) in raw_segments.iter().enumerate() {
        if *segment == WILDCARD_TOKEN {
            segments.push(SegmentPattern::Wildcard);
            ignored_after_wildcard = total - idx - 1;
            break;
        }

        match segment.strip_prefix(PARAM_PREFIX) {
            Some(body) => {
                segments.push(parse_param(pattern, segment, body, registry, max_constraint_len)?)
            }
            None => segments.push(SegmentPattern::Literal(
                segment.to_string().into_boxed_str(),
            )),
        }
    }

    Ok(ParsedPattern {
        segments,
        ignored_after_wildcard,
    })
}

fn parse_param(
    pattern: &str,
    segment: &str,
    body: &str,
    registry: &PatternRegistry,
    max_constraint_len: usize,
) -> PatternResult<SegmentPattern> {
    let (name, raw_constraint) = match body.split_once(CONSTRAINT_DELIMITER) {
        Some((name, raw)) => (name, Some(raw)),
        None => (body, None),
    };

    if name.is_empty() {
        return Err(PatternError::ParameterNameEmpty {
            segment: segment.to_string(),
        });
    }

    let constraint = match raw_constraint {
        Some(raw) => {
            if raw.len() > max_constraint_len {
                return Err(PatternError::ConstraintTooLong {
                    name: name.to_string(),
                    len: raw.len(),
                    limit: max_constraint_len,
                });
            }
            let compiled = registry.compile_or_reuse(raw).map_err(|err| {
                PatternError::RegexConstraintInvalid {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                    error: err.to_string(),
                }
            })?;
            Some(ParamConstraint::new(raw, compiled))
        }
        None => None,
    };

    Ok(SegmentPattern::Param {
        name: name.to_string().into_boxed_str(),
        constraint,
    })
}
