use http::Method;
use std::fmt;

use super::{Params, WILDCARD_PARAM};
use crate::handler::BoxHandler;
use crate::tree::RouteNode;

/// Outcome of routing one (method, path) pair. Every input yields exactly
/// one of these.
pub enum Resolution<'t, B, R> {
    Matched {
        handler: &'t BoxHandler<B, R>,
        params: Params,
    },
    MethodNotAllowed {
        allow: Vec<Method>,
    },
    Preflight {
        allow: Vec<Method>,
    },
    NotFound,
}

impl<B, R> Resolution<'_, B, R> {
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::Matched { .. } => "matched",
            Resolution::MethodNotAllowed { .. } => "method_not_allowed",
            Resolution::Preflight { .. } => "preflight",
            Resolution::NotFound => "not_found",
        }
    }

    pub fn params(&self) -> Option<&Params> {
        match self {
            Resolution::Matched { params, .. } => Some(params),
            _ => None,
        }
    }

    pub fn allowed_methods(&self) -> Option<&[Method]> {
        match self {
            Resolution::MethodNotAllowed { allow } | Resolution::Preflight { allow } => {
                Some(allow)
            }
            _ => None,
        }
    }
}

impl<B, R> fmt::Debug for Resolution<'_, B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Matched { params, .. } => f
                .debug_struct("Matched")
                .field("params", params)
                .finish_non_exhaustive(),
            Resolution::MethodNotAllowed { allow } => f
                .debug_struct("MethodNotAllowed")
                .field("allow", allow)
                .finish(),
            Resolution::Preflight { allow } => {
                f.debug_struct("Preflight").field("allow", allow).finish()
            }
            Resolution::NotFound => f.write_str("NotFound"),
        }
    }
}

/// Depth-first search for the node serving `segments`.
///
/// A wildcard node wins immediately. Otherwise literal children are tried
/// before any parameter child, each group in insertion order, backtracking
/// on failure. Recursion depth is bounded by the tree depth.
pub fn find_route<'t, B, R>(
    node: &'t RouteNode<B, R>,
    segments: &[&str],
    params: &mut Params,
) -> Option<&'t RouteNode<B, R>> {
    if node.is_wildcard() {
        params.push(WILDCARD_PARAM, segments.join("/"));
        return Some(node);
    }

    let Some((segment, rest)) = segments.split_first() else {
        return node.has_bindings().then_some(node);
    };

    for child in node.children.iter() {
        if child.is_param() || child.literal.as_ref() != *segment {
            continue;
        }
        if let Some(found) = find_route(child, rest, params) {
            return Some(found);
        }
    }

    if segment.is_empty() {
        return None;
    }

    for child in node.children.iter().filter(|c| c.is_param()) {
        if let Some(constraint) = child.constraint.as_ref()
            && !constraint.accepts(segment)
        {
            continue;
        }

        let checkpoint = params.len();
        params.push(&child.param_name, (*segment).to_string());
        if let Some(found) = find_route(child, rest, params) {
            return Some(found);
        }
        params.truncate(checkpoint);
    }

    None
}

/// Resolves the handler for `method` on `segments`, falling back to
/// preflight or method-not-allowed with the bound methods plus `OPTIONS`.
pub fn resolve<'t, B, R>(
    root: &'t RouteNode<B, R>,
    method: &Method,
    segments: &[&str],
    handle_preflight: bool,
) -> Resolution<'t, B, R> {
    let mut params = Params::new();

    let Some(node) = find_route(root, segments, &mut params) else {
        return Resolution::NotFound;
    };

    if let Some(handler) = node.handler(method) {
        return Resolution::Matched { handler, params };
    }

    let mut allow: Vec<Method> = node
        .methods()
        .filter(|bound| **bound != Method::OPTIONS)
        .cloned()
        .collect();
    allow.push(Method::OPTIONS);

    if handle_preflight && *method == Method::OPTIONS {
        Resolution::Preflight { allow }
    } else {
        Resolution::MethodNotAllowed { allow }
    }
}
