use crate::errors::{RouterError, RouterResult};
use http::Method;
use smallvec::SmallVec;

/// Methods bound when a registration names none.
pub const STANDARD_METHODS: [Method; 9] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::CONNECT,
    Method::OPTIONS,
    Method::TRACE,
];

pub type MethodList = SmallVec<[Method; 4]>;

/// Uppercases and deduplicates the requested methods, keeping their order.
///
/// An empty request means every standard method. With `auto_head`, GET
/// pulls in HEAD when it is missing.
pub fn normalize_methods<I, M>(methods: I, auto_head: bool) -> RouterResult<MethodList>
where
    I: IntoIterator<Item = M>,
    M: AsRef<str>,
{
    let mut out = MethodList::new();

    for requested in methods {
        let raw = requested.as_ref();
        let upper = raw.trim().to_ascii_uppercase();
        let method =
            Method::from_bytes(upper.as_bytes()).map_err(|_| RouterError::InvalidMethod {
                method: raw.to_string(),
            })?;
        if !out.contains(&method) {
            out.push(method);
        }
    }

    if out.is_empty() {
        out.extend(STANDARD_METHODS.iter().cloned());
    }

    if auto_head && out.contains(&Method::GET) && !out.contains(&Method::HEAD) {
        out.push(Method::HEAD);
    }

    Ok(out)
}

/// `Allow` header value: methods joined with `", "`.
pub fn allow_header_value(methods: &[Method]) -> String {
    methods
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
