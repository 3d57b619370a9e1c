use http::{Method, Request, Response, StatusCode};
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::errors::{RouterError, RouterResult};
use crate::handler::{BoxHandler, Handler, status_handler};
use crate::method::{STANDARD_METHODS, normalize_methods};
use crate::pattern::parse_pattern;
use crate::pipeline::{Middleware, Pipeline};
use crate::readonly::{Fallbacks, RouterReadOnly};
use crate::registry::{PatternRegistry, RegistryStats};
use crate::router::{Group, RouterOptions};
use crate::tree::RouteTree;

struct RouterState<B, R> {
    tree: RouteTree<B, R>,
    pipeline: Pipeline<B, R>,
    not_found: BoxHandler<B, R>,
    method_not_allowed: BoxHandler<B, R>,
    preflight: BoxHandler<B, R>,
    readonly: OnceLock<Arc<RouterReadOnly<B, R>>>,
}

impl<B, R> RouterState<B, R>
where
    B: 'static,
    R: Default + 'static,
{
    fn new() -> Self {
        Self {
            tree: RouteTree::new(),
            pipeline: Pipeline::new(),
            not_found: status_handler(StatusCode::NOT_FOUND),
            method_not_allowed: status_handler(StatusCode::METHOD_NOT_ALLOWED),
            preflight: status_handler(StatusCode::NO_CONTENT),
            readonly: OnceLock::new(),
        }
    }
}

/// Route registration front end.
///
/// Routes are added through `&self` until [`Router::seal`] freezes the tree
/// into a [`RouterReadOnly`]; after that registration fails and requests
/// are served lock-free from the sealed snapshot.
pub struct Router<B, R> {
    inner: RwLock<RouterState<B, R>>,
    registry: PatternRegistry,
    options: RouterOptions,
}

impl<B, R> Router<B, R>
where
    B: 'static,
    R: Default + 'static,
{
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            inner: RwLock::new(RouterState::new()),
            registry: PatternRegistry::new(),
            options: options.unwrap_or_default(),
        }
    }

    /// Like [`Router::new`] but rejects invalid options, e.g. ones read from
    /// a config file.
    pub fn try_new(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn registry_stats(&self) -> RegistryStats {
        self.registry.stats()
    }

    /// Binds `handler` to `pattern` for `methods`.
    ///
    /// No methods means every standard method. The handler is wrapped by the
    /// middleware registered so far.
    pub fn handle<H, I, M>(&self, pattern: &str, handler: H, methods: I) -> RouterResult<()>
    where
        H: Handler<B, R>,
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        self.register(None, pattern, Arc::new(handler), methods)
    }

    method_shortcuts! {
        get => Method::GET;
        post => Method::POST;
        put => Method::PUT;
        patch => Method::PATCH;
        delete => Method::DELETE;
    }

    /// Binds `handler` for every standard method.
    pub fn any<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> RouterResult<()> {
        self.handle(pattern, handler, STANDARD_METHODS)
    }

    /// Appends a decorator to the root chain.
    pub fn use_middleware<M>(&self, middleware: M)
    where
        M: Middleware<B, R>,
    {
        self.inner.write().pipeline.push(Arc::new(middleware));
    }

    /// Runs `f` with a sub-router sharing this tree, starting from a copy of
    /// the current middleware chain.
    pub fn group<F>(&self, f: F) -> RouterResult<()>
    where
        F: FnOnce(&mut Group<'_, B, R>) -> RouterResult<()>,
    {
        let pipeline = self.inner.read().pipeline.clone();
        let mut group = Group::new(self, pipeline);
        f(&mut group)
    }

    pub fn not_found<H: Handler<B, R>>(&self, handler: H) -> RouterResult<()> {
        self.replace_fallback("not_found", Arc::new(handler), |state| &mut state.not_found)
    }

    pub fn method_not_allowed<H: Handler<B, R>>(&self, handler: H) -> RouterResult<()> {
        self.replace_fallback("method_not_allowed", Arc::new(handler), |state| {
            &mut state.method_not_allowed
        })
    }

    pub fn preflight<H: Handler<B, R>>(&self, handler: H) -> RouterResult<()> {
        self.replace_fallback("preflight", Arc::new(handler), |state| &mut state.preflight)
    }

    /// Freezes the tree and returns the shared read-only router. Sealing
    /// twice returns the first snapshot.
    ///
    /// Fallbacks are wrapped before the state lock is taken for writing, so
    /// middleware may call back into the router.
    pub fn seal(&self) -> Arc<RouterReadOnly<B, R>> {
        let (pipeline, not_found, method_not_allowed, preflight) = {
            let guard = self.inner.read();
            if let Some(existing) = guard.readonly.get() {
                return existing.clone();
            }
            (
                guard.pipeline.clone(),
                guard.not_found.clone(),
                guard.method_not_allowed.clone(),
                guard.preflight.clone(),
            )
        };
        let fallbacks = Fallbacks {
            not_found: pipeline.build(not_found),
            method_not_allowed: pipeline.build(method_not_allowed),
            preflight: pipeline.build(preflight),
        };

        let mut guard = self.inner.write();
        if let Some(existing) = guard.readonly.get() {
            return existing.clone();
        }

        let tree = std::mem::take(&mut guard.tree);
        let snapshot = Arc::new(RouterReadOnly::new(
            tree,
            self.options.clone(),
            fallbacks,
            self.registry.stats(),
        ));
        tracing::event!(
            tracing::Level::DEBUG,
            registrations = snapshot.registrations() as u64,
            patterns = self.registry.len() as u64,
            "router sealed"
        );

        let _ = guard.readonly.set(snapshot.clone());
        snapshot
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouterReadOnly<B, R>>> {
        self.inner
            .read()
            .readonly
            .get()
            .cloned()
            .ok_or(RouterError::NotSealed)
    }

    /// Dispatches through the sealed snapshot; fails if the router has not
    /// been sealed yet.
    pub fn dispatch(&self, request: Request<B>) -> RouterResult<Response<R>> {
        let readonly = self.get_readonly()?;
        Ok(readonly.dispatch(request))
    }

    pub(crate) fn register<I, M>(
        &self,
        chain: Option<&Pipeline<B, R>>,
        pattern: &str,
        handler: BoxHandler<B, R>,
        methods: I,
    ) -> RouterResult<()>
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        if self.inner.read().readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                path: pattern.to_string(),
            });
        }

        let methods = normalize_methods(methods, self.options.auto_head)?;
        let parsed = parse_pattern(pattern, &self.registry, self.options.max_constraint_len)?;

        let wrapped = match chain {
            Some(pipeline) => pipeline.build(handler),
            None => {
                let pipeline = self.inner.read().pipeline.clone();
                pipeline.build(handler)
            }
        };

        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                path: pattern.to_string(),
            });
        }
        guard.tree.insert(&parsed, &methods, wrapped);

        tracing::event!(
            tracing::Level::DEBUG,
            pattern = %pattern,
            methods = ?methods.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
            "route registered"
        );
        Ok(())
    }

    fn replace_fallback(
        &self,
        fallback: &'static str,
        handler: BoxHandler<B, R>,
        slot: impl FnOnce(&mut RouterState<B, R>) -> &mut BoxHandler<B, R>,
    ) -> RouterResult<()> {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return Err(RouterError::FallbackWhileSealed { fallback });
        }
        *slot(&mut *guard) = handler;
        Ok(())
    }
}

impl<B, R> Default for Router<B, R>
where
    B: 'static,
    R: Default + 'static,
{
    fn default() -> Self {
        Self::new(None)
    }
}

impl<B, R> fmt::Debug for Router<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.read();
        f.debug_struct("Router")
            .field("options", &self.options)
            .field("sealed", &guard.readonly.get().is_some())
            .field("pipeline", &guard.pipeline)
            .field(
                "registrations",
                &guard
                    .readonly
                    .get()
                    .map_or(guard.tree.registrations(), |snapshot| {
                        snapshot.registrations()
                    }),
            )
            .finish_non_exhaustive()
    }
}
