use http::{Method, Request};
use smallvec::SmallVec;

/// Key under which a wildcard capture is stored.
pub const WILDCARD_PARAM: &str = "...";

/// Path parameters captured for one request.
///
/// Inserted into the request extensions before the handler runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: SmallVec<[(String, String); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured value for `name`, or `None` when nothing was captured.
    ///
    /// A name captured twice on one path resolves to the deepest capture.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn wildcard(&self) -> Option<&str> {
        self.get(WILDCARD_PARAM)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        self.entries.push((name.to_string(), value));
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }
}

/// Methods reported to the method-not-allowed and preflight handlers,
/// `OPTIONS` included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedMethods(pub Vec<Method>);

/// Captured value for `name` on `request`, or `""` when absent.
///
/// Absent and empty captures look the same here; use
/// [`Params::get`] to tell them apart.
pub fn param<'a, B>(request: &'a Request<B>, name: &str) -> &'a str {
    request
        .extensions()
        .get::<Params>()
        .and_then(|params| params.get(name))
        .unwrap_or("")
}
