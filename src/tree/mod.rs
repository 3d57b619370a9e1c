mod insert;
mod node;

pub use node::{NodeFlags, RouteNode};

use std::fmt;

/// Segment-keyed route tree. Mutated only while routes are registered.
pub struct RouteTree<B, R> {
    pub(crate) root: RouteNode<B, R>,
    pub(crate) registrations: usize,
}

impl<B, R> RouteTree<B, R> {
    pub fn new() -> Self {
        Self {
            root: RouteNode::default(),
            registrations: 0,
        }
    }

    pub fn root(&self) -> &RouteNode<B, R> {
        &self.root
    }

    /// Number of successful `insert` calls, overwrites included.
    pub fn registrations(&self) -> usize {
        self.registrations
    }
}

impl<B, R> Default for RouteTree<B, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, R> fmt::Debug for RouteTree<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTree")
            .field("registrations", &self.registrations)
            .field("root", &self.root)
            .finish()
    }
}
