use crate::path::{PathError, PathResult};
use memchr::memchr_iter;
use smallvec::SmallVec;

pub type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Splits a path into its `/`-delimited segments after trimming every
/// leading and trailing separator.
///
/// The result always holds at least one element: `/` and the empty string
/// both yield a single empty segment. Interior empty segments (`/a//b`) are
/// kept as-is, the path is not percent-decoded.
#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn split_segments(path: &str) -> Segments<'_> {
    let trimmed = path.trim_matches('/');
    let mut out: Segments<'_> = SmallVec::new();
    let mut start = 0usize;

    for idx in memchr_iter(b'/', trimmed.as_bytes()) {
        out.push(&trimmed[start..idx]);
        start = idx + 1;
    }
    out.push(&trimmed[start..]);

    out
}

pub fn validate_pattern_path(pattern: &str) -> PathResult<()> {
    for &byte in pattern.as_bytes() {
        if byte <= 0x20 || byte == 0x7f {
            return Err(PathError::ControlOrWhitespace {
                input: pattern.to_string(),
                byte,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_leading_and_trailing_separators() {
        let segments = split_segments("//users/42/profile///");
        assert_eq!(segments.as_slice(), &["users", "42", "profile"]);
    }

    #[test]
    fn root_yields_single_empty_segment() {
        assert_eq!(split_segments("/").as_slice(), &[""]);
        assert_eq!(split_segments("").as_slice(), &[""]);
    }

    #[test]
    fn preserves_interior_empty_segments() {
        let segments = split_segments("/a//b");
        assert_eq!(segments.as_slice(), &["a", "", "b"]);
    }

    #[test]
    fn keeps_escaped_bytes_untouched() {
        let segments = split_segments("/files/caf%C3%A9");
        assert_eq!(segments.as_slice(), &["files", "caf%C3%A9"]);
    }

    #[test]
    fn rejects_whitespace_in_pattern() {
        let err = validate_pattern_path("/users/ id").unwrap_err();
        assert_eq!(
            err,
            PathError::ControlOrWhitespace {
                input: "/users/ id".to_string(),
                byte: b' ',
            }
        );
    }

    #[test]
    fn accepts_pattern_syntax_characters() {
        assert!(validate_pattern_path("/p/:era|^[0-9]{2}$/...").is_ok());
    }
}
