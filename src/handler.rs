use http::{Request, Response, StatusCode};
use std::sync::Arc;

/// Anything that turns a request into a response.
///
/// Implemented for every `Fn(Request<B>) -> Response<R>` closure, so plain
/// functions and closures register directly.
pub trait Handler<B, R>: Send + Sync + 'static {
    fn call(&self, request: Request<B>) -> Response<R>;
}

impl<F, B, R> Handler<B, R> for F
where
    F: Fn(Request<B>) -> Response<R> + Send + Sync + 'static,
{
    #[inline]
    fn call(&self, request: Request<B>) -> Response<R> {
        self(request)
    }
}

pub type BoxHandler<B, R> = Arc<dyn Handler<B, R>>;

pub fn boxed<B, R, H>(handler: H) -> BoxHandler<B, R>
where
    H: Handler<B, R>,
{
    Arc::new(handler)
}

/// Empty-bodied response with a fixed status; used for the default
/// not-found, method-not-allowed and preflight handlers.
pub(crate) fn status_handler<B, R>(status: StatusCode) -> BoxHandler<B, R>
where
    B: 'static,
    R: Default + 'static,
{
    Arc::new(move |_request: Request<B>| {
        let mut response = Response::new(R::default());
        *response.status_mut() = status;
        response
    })
}
