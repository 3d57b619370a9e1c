use regex::Regex;
use std::sync::Arc;

pub const WILDCARD_TOKEN: &str = "...";
pub const PARAM_PREFIX: char = ':';
pub const CONSTRAINT_DELIMITER: char = '|';

#[derive(Debug, Clone)]
pub struct ParamConstraint {
    raw: Box<str>,
    compiled: Arc<Regex>,
}

impl ParamConstraint {
    pub fn new(raw: &str, compiled: Arc<Regex>) -> Self {
        Self {
            raw: raw.to_string().into_boxed_str(),
            compiled,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Search semantics: the pattern is not anchored, so `[0-9]{2}` accepts
    /// `600`. Callers wanting a full-segment match write `^...$` themselves.
    #[inline]
    pub fn accepts(&self, segment: &str) -> bool {
        self.compiled.is_match(segment)
    }
}

impl PartialEq for ParamConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ParamConstraint {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentPattern {
    Literal(Box<str>),
    Param {
        name: Box<str>,
        constraint: Option<ParamConstraint>,
    },
    Wildcard,
}
