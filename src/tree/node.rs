use bitflags::bitflags;
use http::Method;
use smallvec::SmallVec;
use std::fmt;

use crate::handler::BoxHandler;
use crate::pattern::ParamConstraint;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        const WILDCARD = 0b00000001;
    }
}

pub(crate) type Bindings<B, R> = SmallVec<[(Method, BoxHandler<B, R>); 4]>;

/// One segment position in the route tree.
///
/// A node is either a literal node (`param_name` empty) or a parameter node
/// (`param_name` set, `literal` empty), never both. Children keep the order
/// of their first registration; that order is the matching priority.
pub struct RouteNode<B, R> {
    pub(crate) literal: Box<str>,
    pub(crate) param_name: Box<str>,
    pub(crate) constraint: Option<ParamConstraint>,
    pub(crate) flags: NodeFlags,
    pub(crate) bindings: Bindings<B, R>,
    pub(crate) children: Vec<RouteNode<B, R>>,
}

impl<B, R> RouteNode<B, R> {
    pub(crate) fn new(literal: &str, param_name: &str) -> Self {
        Self {
            literal: literal.to_string().into_boxed_str(),
            param_name: param_name.to_string().into_boxed_str(),
            constraint: None,
            flags: NodeFlags::empty(),
            bindings: SmallVec::new(),
            children: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn is_wildcard(&self) -> bool {
        self.flags.contains(NodeFlags::WILDCARD)
    }

    #[inline(always)]
    pub(crate) fn set_wildcard(&mut self) {
        self.flags.insert(NodeFlags::WILDCARD);
    }

    #[inline(always)]
    pub fn is_param(&self) -> bool {
        !self.param_name.is_empty()
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    pub fn constraint(&self) -> Option<&ParamConstraint> {
        self.constraint.as_ref()
    }

    pub fn children(&self) -> &[RouteNode<B, R>] {
        &self.children
    }

    #[inline]
    pub fn has_bindings(&self) -> bool {
        !self.bindings.is_empty()
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> + '_ {
        self.bindings.iter().map(|(method, _)| method)
    }

    pub fn handler(&self, method: &Method) -> Option<&BoxHandler<B, R>> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == method)
            .map(|(_, handler)| handler)
    }

    /// Binds `handler` under `method`, returning the handler it replaced.
    pub(crate) fn bind(
        &mut self,
        method: Method,
        handler: BoxHandler<B, R>,
    ) -> Option<BoxHandler<B, R>> {
        match self.bindings.iter_mut().find(|(bound, _)| *bound == method) {
            Some((_, slot)) => Some(std::mem::replace(slot, handler)),
            None => {
                self.bindings.push((method, handler));
                None
            }
        }
    }

    /// Returns the child keyed by `(literal, param_name)`, appending a new one
    /// when none exists yet.
    pub(crate) fn child_mut(&mut self, literal: &str, param_name: &str) -> &mut RouteNode<B, R> {
        if let Some(pos) = self
            .children
            .iter()
            .position(|c| c.literal.as_ref() == literal && c.param_name.as_ref() == param_name)
        {
            return &mut self.children[pos];
        }
        self.children.push(RouteNode::new(literal, param_name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }
}

impl<B, R> Default for RouteNode<B, R> {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl<B, R> fmt::Debug for RouteNode<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteNode")
            .field("literal", &self.literal)
            .field("param_name", &self.param_name)
            .field("constraint", &self.constraint.as_ref().map(|c| c.raw()))
            .field("flags", &self.flags)
            .field(
                "methods",
                &self.methods().map(Method::as_str).collect::<Vec<_>>(),
            )
            .field("children", &self.children)
            .finish()
    }
}
