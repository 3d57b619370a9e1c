use crate::handler::BoxHandler;
use std::fmt;
use std::sync::Arc;

/// A decorator: takes the next handler and returns a handler wrapping it.
pub trait Middleware<B, R>: Send + Sync + 'static {
    fn wrap(&self, next: BoxHandler<B, R>) -> BoxHandler<B, R>;
}

impl<F, B, R> Middleware<B, R> for F
where
    F: Fn(BoxHandler<B, R>) -> BoxHandler<B, R> + Send + Sync + 'static,
{
    #[inline]
    fn wrap(&self, next: BoxHandler<B, R>) -> BoxHandler<B, R> {
        self(next)
    }
}

pub type BoxMiddleware<B, R> = Arc<dyn Middleware<B, R>>;

/// Ordered decorator chain.
///
/// The first pushed layer is outermost: it sees the request first and the
/// last pushed layer sits right next to the handler.
pub struct Pipeline<B, R> {
    layers: Vec<BoxMiddleware<B, R>>,
}

impl<B, R> Pipeline<B, R>
where
    B: 'static,
    R: 'static,
{
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn push(&mut self, layer: BoxMiddleware<B, R>) {
        self.layers.push(layer);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Folds the chain right to left around `handler`.
    pub fn build(&self, handler: BoxHandler<B, R>) -> BoxHandler<B, R> {
        self.layers
            .iter()
            .rev()
            .fold(handler, |inner, layer| layer.wrap(inner))
    }
}

impl<B, R> Default for Pipeline<B, R>
where
    B: 'static,
    R: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<B, R> Clone for Pipeline<B, R> {
    fn clone(&self) -> Self {
        Self {
            layers: self.layers.clone(),
        }
    }
}

impl<B, R> fmt::Debug for Pipeline<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("layers", &self.layers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::boxed;
    use http::{Request, Response};
    use parking_lot::Mutex;

    type Trace = Arc<Mutex<Vec<&'static str>>>;

    fn tracing_layer(trace: Trace, id: &'static str) -> BoxMiddleware<(), String> {
        Arc::new(move |next: BoxHandler<(), String>| -> BoxHandler<(), String> {
            let trace = trace.clone();
            Arc::new(move |request: Request<()>| {
                trace.lock().push(id);
                next.call(request)
            })
        })
    }

    #[test]
    fn executes_layers_in_registration_order() {
        let trace: Trace = Arc::default();
        let mut pipeline = Pipeline::new();
        pipeline.push(tracing_layer(trace.clone(), "a"));
        pipeline.push(tracing_layer(trace.clone(), "b"));
        pipeline.push(tracing_layer(trace.clone(), "c"));

        let inner_trace = trace.clone();
        let handler = pipeline.build(boxed(move |_request: Request<()>| {
            inner_trace.lock().push("handler");
            Response::new(String::new())
        }));
        handler.call(Request::new(()));

        assert_eq!(*trace.lock(), vec!["a", "b", "c", "handler"]);
    }

    #[test]
    fn empty_pipeline_returns_handler_unchanged() {
        let pipeline: Pipeline<(), String> = Pipeline::default();
        let handler: BoxHandler<(), String> =
            boxed(|_request: Request<()>| Response::new("plain".to_string()));
        let built = pipeline.build(handler.clone());

        assert!(Arc::ptr_eq(&handler, &built));
        assert!(pipeline.is_empty());
    }

    #[test]
    fn clone_is_an_independent_snapshot() {
        let trace: Trace = Arc::default();
        let mut parent = Pipeline::new();
        parent.push(tracing_layer(trace.clone(), "a"));

        let mut child = parent.clone();
        child.push(tracing_layer(trace.clone(), "b"));

        assert_eq!(parent.len(), 1);
        assert_eq!(child.len(), 2);
    }
}
