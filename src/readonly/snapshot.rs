use http::header::{ALLOW, HeaderValue};
use http::{Method, Request, Response};
use std::fmt;

use crate::handler::BoxHandler;
use crate::matcher::{AllowedMethods, Resolution, resolve};
use crate::method::allow_header_value;
use crate::path::split_segments;
use crate::registry::RegistryStats;
use crate::router::RouterOptions;
use crate::tree::{RouteNode, RouteTree};

pub(crate) struct Fallbacks<B, R> {
    pub not_found: BoxHandler<B, R>,
    pub method_not_allowed: BoxHandler<B, R>,
    pub preflight: BoxHandler<B, R>,
}

/// Sealed router: the tree is frozen and shared across threads.
///
/// Resolution and dispatch take `&self` and never lock.
pub struct RouterReadOnly<B, R> {
    root: RouteNode<B, R>,
    options: RouterOptions,
    fallbacks: Fallbacks<B, R>,
    registry_stats: RegistryStats,
    registrations: usize,
}

impl<B, R> RouterReadOnly<B, R> {
    pub(crate) fn new(
        tree: RouteTree<B, R>,
        options: RouterOptions,
        fallbacks: Fallbacks<B, R>,
        registry_stats: RegistryStats,
    ) -> Self {
        Self {
            registrations: tree.registrations,
            root: tree.root,
            options,
            fallbacks,
            registry_stats,
        }
    }

    pub fn root(&self) -> &RouteNode<B, R> {
        &self.root
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn registry_stats(&self) -> RegistryStats {
        self.registry_stats
    }

    pub fn registrations(&self) -> usize {
        self.registrations
    }

    #[tracing::instrument(level = "trace", skip_all, fields(method = %method, path = %path))]
    pub fn resolve(&self, method: &Method, path: &str) -> Resolution<'_, B, R> {
        let segments = split_segments(path);
        let resolution = resolve(
            &self.root,
            method,
            &segments,
            self.options.handle_preflight,
        );

        if self.options.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                method = %method,
                path = %path,
                outcome = resolution.kind(),
                "route resolved"
            );
        }

        resolution
    }
}

impl<B, R> RouterReadOnly<B, R>
where
    B: 'static,
    R: 'static,
{
    /// Routes `request` and runs whichever handler the resolution picks.
    ///
    /// Matched handlers find their [`Params`](crate::matcher::Params) in the
    /// request extensions. Method-not-allowed and preflight responses get an
    /// `Allow` header unless their handler already set one.
    #[tracing::instrument(level = "trace", skip_all, fields(method = %request.method(), path = %request.uri().path()))]
    pub fn dispatch(&self, mut request: Request<B>) -> Response<R> {
        match self.resolve(request.method(), request.uri().path()) {
            Resolution::Matched { handler, params } => {
                request.extensions_mut().insert(params);
                handler.call(request)
            }
            Resolution::MethodNotAllowed { allow } => {
                respond_with_allow(&self.fallbacks.method_not_allowed, request, allow)
            }
            Resolution::Preflight { allow } => {
                respond_with_allow(&self.fallbacks.preflight, request, allow)
            }
            Resolution::NotFound => self.fallbacks.not_found.call(request),
        }
    }
}

fn respond_with_allow<B, R>(
    handler: &BoxHandler<B, R>,
    mut request: Request<B>,
    allow: Vec<Method>,
) -> Response<R>
where
    B: 'static,
    R: 'static,
{
    let header = allow_header_value(&allow);
    request.extensions_mut().insert(AllowedMethods(allow));

    let mut response = handler.call(request);
    if !response.headers().contains_key(ALLOW)
        && let Ok(value) = HeaderValue::from_str(&header)
    {
        response.headers_mut().insert(ALLOW, value);
    }
    response
}

impl<B, R> fmt::Debug for RouterReadOnly<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterReadOnly")
            .field("options", &self.options)
            .field("registrations", &self.registrations)
            .field("registry_stats", &self.registry_stats)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
