use crate::error::InsertError;
use crate::segment::Segment;

use regex::Regex;
use std::collections::HashMap;

/// The kind of segment a [`Node`] matches.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    /// Matched by exact text.
    Static,
    /// A named parameter whose value must satisfy a regular expression.
    Regex,
    /// A named parameter matching any non-empty segment.
    Param,
    /// Matches any segment without binding it. A wildcard that carries a
    /// handler also takes every remaining segment its own children do not.
    Wildcard,
}

/// A node in the routing tree, representing one segment position.
///
/// Children are tried in a fixed order during lookup: the static child with
/// the exact segment text, then the regex child if its pattern matches, then
/// the param child, then the wildcard child. The first applicable child is
/// taken and never revisited.
#[derive(Debug)]
pub struct Node<V> {
    kind: NodeKind,
    segment: String,
    // Set for `Param` and `Regex` nodes.
    param_name: Option<String>,
    // Set for `Regex` nodes.
    regex: Option<Regex>,
    static_children: HashMap<String, Node<V>>,
    regex_child: Option<Box<Node<V>>>,
    param_child: Option<Box<Node<V>>>,
    wildcard_child: Option<Box<Node<V>>>,
    handler: Option<V>,
}

impl<V> Node<V> {
    fn new(kind: NodeKind, segment: impl Into<String>) -> Self {
        Node {
            kind,
            segment: segment.into(),
            param_name: None,
            regex: None,
            static_children: HashMap::new(),
            regex_child: None,
            param_child: None,
            wildcard_child: None,
            handler: None,
        }
    }

    /// The root of a method tree, representing the path `/`.
    pub(crate) fn root() -> Self {
        Node::new(NodeKind::Static, "/")
    }

    /// Returns the kind of segment this node matches.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the segment text this node was registered with, e.g. `users`,
    /// `:id`, `:id(\d+)` or `*`.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Returns the name a matching segment is bound to, for parameter nodes.
    pub fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    /// Returns the handler bound to this node, if a route terminates here.
    pub fn handler(&self) -> Option<&V> {
        self.handler.as_ref()
    }

    /// Returns `true` if this node has no children of any kind.
    pub fn is_leaf(&self) -> bool {
        self.static_children.is_empty()
            && self.regex_child.is_none()
            && self.param_child.is_none()
            && self.wildcard_child.is_none()
    }

    // Binds `handler` to this node.
    pub(crate) fn set_handler(&mut self, handler: V, route: &str) -> Result<(), InsertError> {
        if self.handler.is_some() {
            return Err(InsertError::Duplicate {
                path: route.to_owned(),
            });
        }

        self.handler = Some(handler);
        Ok(())
    }

    // Returns the child for `segment`, creating it if necessary.
    pub(crate) fn child_or_create(
        &mut self,
        segment: Segment<'_>,
        route: &str,
    ) -> Result<&mut Node<V>, InsertError> {
        match segment {
            Segment::Static(text) => Ok(self
                .static_children
                .entry(text.to_owned())
                .or_insert_with(|| Node::new(NodeKind::Static, text))),
            Segment::Wildcard => {
                if self.param_child.is_some() {
                    return Err(InsertError::ParamWildcardConflict {
                        path: route.to_owned(),
                    });
                }

                let child = self
                    .wildcard_child
                    .get_or_insert_with(|| Box::new(Node::new(NodeKind::Wildcard, "*")));
                Ok(&mut **child)
            }
            Segment::Param(name) => {
                if self.wildcard_child.is_some() {
                    return Err(InsertError::ParamWildcardConflict {
                        path: route.to_owned(),
                    });
                }

                if let Some(existing) = self.param_child.as_deref() {
                    if existing.param_name() != Some(name) {
                        return Err(InsertError::ParamNameConflict {
                            path: route.to_owned(),
                            existing: existing.segment.clone(),
                        });
                    }
                }

                let child = self.param_child.get_or_insert_with(|| {
                    let mut node = Node::new(NodeKind::Param, format!(":{}", name));
                    node.param_name = Some(name.to_owned());
                    Box::new(node)
                });
                Ok(&mut **child)
            }
            Segment::Regex {
                name,
                pattern,
                regex,
            } => {
                if let Some(existing) = self.regex_child.as_deref() {
                    let same_pattern = existing
                        .regex
                        .as_ref()
                        .is_some_and(|existing| existing.as_str() == regex.as_str());

                    if existing.param_name() != Some(name) || !same_pattern {
                        return Err(InsertError::RegexConflict {
                            path: route.to_owned(),
                            existing: existing.segment.clone(),
                        });
                    }
                }

                let child = self.regex_child.get_or_insert_with(|| {
                    let mut node = Node::new(NodeKind::Regex, format!(":{}({})", name, pattern));
                    node.param_name = Some(name.to_owned());
                    node.regex = Some(regex);
                    Box::new(node)
                });
                Ok(&mut **child)
            }
        }
    }

    // Returns the child that `segment` descends into, most specific first.
    pub(crate) fn child_of(&self, segment: &str) -> Option<&Node<V>> {
        if segment.is_empty() {
            return None;
        }

        if let Some(child) = self.static_children.get(segment) {
            return Some(child);
        }

        if let Some(child) = self.regex_child.as_deref() {
            if child.regex.as_ref().is_some_and(|re| re.is_match(segment)) {
                return Some(child);
            }
        }

        self.param_child
            .as_deref()
            .or_else(|| self.wildcard_child.as_deref())
    }

    // Counts the handlers bound in this subtree.
    pub(crate) fn handler_count(&self) -> usize {
        let own = usize::from(self.handler.is_some());

        own + self
            .static_children
            .values()
            .chain(self.regex_child.as_deref())
            .chain(self.param_child.as_deref())
            .chain(self.wildcard_child.as_deref())
            .map(Node::handler_count)
            .sum::<usize>()
    }
}
