use http::Method;

use super::{RouteNode, RouteTree};
use crate::handler::BoxHandler;
use crate::pattern::{ParsedPattern, SegmentPattern};

impl<B, R> RouteTree<B, R> {
    /// Inserts a parsed pattern, binding `handler` under every method.
    ///
    /// Existing nodes are reused so several methods and routes accumulate on
    /// one path position. The first constraint given for a parameter node
    /// sticks; a later binding for the same method replaces the earlier one.
    #[tracing::instrument(level = "trace", skip_all, fields(segments = parsed.segments.len() as u64))]
    pub fn insert(&mut self, parsed: &ParsedPattern, methods: &[Method], handler: BoxHandler<B, R>) {
        let mut current = &mut self.root;

        for segment in parsed.segments.iter() {
            match segment {
                SegmentPattern::Wildcard => {
                    if parsed.ignored_after_wildcard > 0 {
                        tracing::event!(
                            tracing::Level::WARN,
                            ignored = parsed.ignored_after_wildcard as u64,
                            "segments after wildcard marker are ignored"
                        );
                    }
                    current.set_wildcard();
                    break;
                }
                SegmentPattern::Param { name, constraint } => {
                    let child = current.child_mut("", name);
                    if let Some(incoming) = constraint {
                        let kept = child.constraint.get_or_insert_with(|| incoming.clone());
                        if kept != incoming {
                            tracing::event!(
                                tracing::Level::WARN,
                                param = %name,
                                kept = %kept.raw(),
                                dropped = %incoming.raw(),
                                "parameter already constrained; keeping first constraint"
                            );
                        }
                    }
                    current = child;
                }
                SegmentPattern::Literal(text) => {
                    current = current.child_mut(text, "");
                }
            }
        }

        bind_all(current, methods, handler);
        self.registrations += 1;
    }
}

fn bind_all<B, R>(node: &mut RouteNode<B, R>, methods: &[Method], handler: BoxHandler<B, R>) {
    for method in methods {
        if node.bind(method.clone(), handler.clone()).is_some() {
            tracing::event!(
                tracing::Level::DEBUG,
                method = %method,
                "existing binding replaced"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::boxed;
    use crate::pattern::parse_pattern;
    use crate::registry::PatternRegistry;
    use http::{Request, Response};

    type Tree = RouteTree<(), String>;

    fn insert(tree: &mut Tree, registry: &PatternRegistry, pattern: &str, methods: &[Method]) {
        let parsed = parse_pattern(pattern, registry, 1024).unwrap();
        tree.insert(
            &parsed,
            methods,
            boxed(|_request: Request<()>| Response::new(String::new())),
        );
    }

    #[test]
    fn reuses_nodes_for_shared_prefixes() {
        let registry = PatternRegistry::new();
        let mut tree = Tree::new();
        insert(&mut tree, &registry, "/users/:id", &[Method::GET]);
        insert(&mut tree, &registry, "/users/:id", &[Method::POST]);
        insert(&mut tree, &registry, "/users/new", &[Method::GET]);

        let users = &tree.root().children()[0];
        assert_eq!(users.literal(), "users");
        assert_eq!(users.children().len(), 2);

        let id = &users.children()[0];
        assert!(id.is_param());
        assert_eq!(id.param_name(), "id");
        assert_eq!(id.methods().collect::<Vec<_>>(), vec![&Method::GET, &Method::POST]);
        assert_eq!(users.children()[1].literal(), "new");
        assert_eq!(tree.registrations(), 3);
    }

    #[test]
    fn first_constraint_wins() {
        let registry = PatternRegistry::new();
        let mut tree = Tree::new();
        insert(&mut tree, &registry, "/n/:id", &[Method::PUT]);
        insert(&mut tree, &registry, "/n/:id|^[0-9]+$", &[Method::GET]);
        insert(&mut tree, &registry, "/n/:id|^[a-z]+$", &[Method::POST]);

        let id = &tree.root().children()[0].children()[0];
        assert_eq!(tree.root().children()[0].children().len(), 1);
        assert_eq!(id.constraint().map(|c| c.raw()), Some("^[0-9]+$"));
    }

    #[test]
    fn wildcard_marks_current_node() {
        let registry = PatternRegistry::new();
        let mut tree = Tree::new();
        insert(&mut tree, &registry, "/static/.../ignored", &[Method::GET]);

        let node = &tree.root().children()[0];
        assert_eq!(node.literal(), "static");
        assert!(node.is_wildcard());
        assert!(node.children().is_empty());
        assert!(node.handler(&Method::GET).is_some());
    }

    #[test]
    fn rebinding_replaces_without_duplicating() {
        let registry = PatternRegistry::new();
        let mut tree = Tree::new();
        insert(&mut tree, &registry, "/one", &[Method::GET]);
        insert(&mut tree, &registry, "/one", &[Method::GET]);

        let node = &tree.root().children()[0];
        assert_eq!(node.methods().count(), 1);
    }
}
