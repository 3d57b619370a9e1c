use http::Method;
use std::fmt;
use std::sync::Arc;

use crate::errors::RouterResult;
use crate::handler::Handler;
use crate::method::STANDARD_METHODS;
use crate::pipeline::{Middleware, Pipeline};
use crate::router::Router;

/// Scoped registration handle created by [`Router::group`].
///
/// Routes land in the parent's tree. The middleware chain is a private copy
/// taken when the group was opened, so decorators added here never reach
/// the parent or sibling groups.
pub struct Group<'r, B, R> {
    router: &'r Router<B, R>,
    pipeline: Pipeline<B, R>,
}

impl<'r, B, R> Group<'r, B, R>
where
    B: 'static,
    R: Default + 'static,
{
    pub(crate) fn new(router: &'r Router<B, R>, pipeline: Pipeline<B, R>) -> Self {
        Self { router, pipeline }
    }

    pub fn use_middleware<M>(&mut self, middleware: M)
    where
        M: Middleware<B, R>,
    {
        self.pipeline.push(Arc::new(middleware));
    }

    pub fn handle<H, I, M>(&self, pattern: &str, handler: H, methods: I) -> RouterResult<()>
    where
        H: Handler<B, R>,
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        self.router
            .register(Some(&self.pipeline), pattern, Arc::new(handler), methods)
    }

    method_shortcuts! {
        get => Method::GET;
        post => Method::POST;
        put => Method::PUT;
        patch => Method::PATCH;
        delete => Method::DELETE;
    }

    pub fn any<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> RouterResult<()> {
        self.handle(pattern, handler, STANDARD_METHODS)
    }

    /// Opens a nested group inheriting this group's chain.
    pub fn group<F>(&self, f: F) -> RouterResult<()>
    where
        F: FnOnce(&mut Group<'r, B, R>) -> RouterResult<()>,
    {
        let mut nested = Group::new(self.router, self.pipeline.clone());
        f(&mut nested)
    }
}

impl<B, R> fmt::Debug for Group<'_, B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}
