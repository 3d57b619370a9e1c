//! Segment tree HTTP router.
//!
//! Routes are registered as `(pattern, methods) -> handler` bindings on a
//! [`Router`], then [`Router::seal`] freezes them into a [`RouterReadOnly`]
//! that dispatches `http::Request`s from any number of threads.
//!
//! Pattern syntax, one token per segment:
//!
//! | token            | meaning                                              |
//! |------------------|------------------------------------------------------|
//! | `users`          | literal                                              |
//! | `:id`            | named capture of any non-empty segment               |
//! | `:id\|^[0-9]+$`  | capture constrained by a regex (search, not anchored)|
//! | `...`            | captures the rest of the path under `...`            |
//!
//! Literal children are always tried before parameter children, each in
//! registration order, with backtracking.

pub mod errors;
pub mod handler;
pub mod matcher;
pub mod method;
mod path;
pub mod pattern;
pub mod pipeline;
pub mod readonly;
pub mod registry;
pub mod router;
pub mod tree;

pub use errors::{RouterError, RouterResult};
pub use handler::{BoxHandler, Handler, boxed};
pub use matcher::{AllowedMethods, Params, Resolution, WILDCARD_PARAM, param};
pub use path::PathError;
pub use pipeline::{BoxMiddleware, Middleware, Pipeline};
pub use readonly::RouterReadOnly;
pub use router::{Group, Router, RouterOptions, RouterOptionsBuilder, RouterOptionsError};
