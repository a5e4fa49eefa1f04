use crate::error::{InsertError, MatchError};
use crate::params::Params;
use crate::segment::Segment;
use crate::tree::{Node, NodeKind};

use std::collections::HashMap;

/// A request router that keeps one routing tree per HTTP method.
///
/// Routes are registered during startup with [`Router::add_route`] (or one
/// of the method shortcuts) and looked up while serving with
/// [`Router::find_route`]. Lookup never mutates the router, so a fully built
/// router can be shared between request-handling threads, e.g. behind an
/// `Arc`.
///
/// ```rust
/// use segtree_router::Router;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.get("/", "index")?;
/// router.get("/users/:id", "user")?;
/// router.get(r"/posts/:slug([a-z-]+)", "post")?;
/// router.get("/static/*", "assets")?;
///
/// let matched = router.find_route("GET", "/users/978")?;
/// assert_eq!(matched.handler(), Some(&"user"));
/// assert_eq!(matched.params.get("id"), Some("978"));
///
/// let matched = router.find_route("GET", "/static/css/site.css")?;
/// assert_eq!(matched.handler(), Some(&"assets"));
///
/// assert!(router.find_route("POST", "/users/978").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Router<V> {
    trees: HashMap<String, Node<V>>,

    /// Strips leading and trailing slashes from the request path before
    /// lookup, so `/users/1/` finds the route registered as `/users/:id`.
    /// A path made only of slashes, such as `///`, resolves to the root.
    ///
    /// Request paths must start with `/` in either mode; `""` never matches.
    ///
    /// When disabled, a trailing slash produces an empty final segment, which
    /// never matches.
    pub trim_slashes: bool,
}

/// A successful route lookup.
#[derive(Debug)]
pub struct Match<'r, 'p, V> {
    /// The node the path resolved to.
    ///
    /// The node is not guaranteed to carry a handler: a path that names an
    /// intermediate node of a longer route still resolves.
    pub node: &'r Node<V>,
    /// The parameters bound while descending to `node`.
    pub params: Params<'r, 'p>,
}

impl<'r, 'p, V> Match<'r, 'p, V> {
    /// Returns the handler bound to the matched node, if any.
    pub fn handler(&self) -> Option<&'r V> {
        self.node.handler()
    }
}

impl<V> Router<V> {
    /// Construct a new router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for requests with the given method and path.
    ///
    /// The path must start with `/`, must not end with `/` unless it is the
    /// root, and must not contain empty segments. Each segment is one of:
    ///
    /// ```text
    ///  Syntax            Type
    ///  users             static segment
    ///  :name             named parameter
    ///  :name(pattern)    named parameter constrained by a regular expression
    ///  *                 wildcard
    /// ```
    ///
    /// Registration fails if a handler already exists for the same path, if
    /// a parameter and a wildcard would share a position, or if a position
    /// is declared with two different parameter names or regex patterns. A
    /// failed registration leaves the router unchanged.
    ///
    /// ```rust
    /// use segtree_router::{InsertError, Router};
    ///
    /// let mut router = Router::new();
    /// router.add_route("GET", "/user/:id", "user").unwrap();
    ///
    /// assert_eq!(
    ///     router.add_route("GET", "/user/:name", "user"),
    ///     Err(InsertError::ParamNameConflict {
    ///         path: "/user/:name".into(),
    ///         existing: ":id".into(),
    ///     })
    /// );
    /// ```
    pub fn add_route(
        &mut self,
        method: impl Into<String>,
        path: &str,
        handler: V,
    ) -> Result<(), InsertError> {
        let method = method.into();

        match self.insert(&method, path, handler) {
            Ok(()) => {
                debug!("registered route {} {}", method, path);
                Ok(())
            }
            Err(err) => {
                warn!("rejected route {} {}: {}", method, path, err);
                Err(err)
            }
        }
    }

    fn insert(&mut self, method: &str, path: &str, handler: V) -> Result<(), InsertError> {
        if path.is_empty() {
            return Err(InsertError::EmptyPath);
        }

        if !path.starts_with('/') {
            return Err(InsertError::MissingLeadingSlash {
                path: path.to_owned(),
            });
        }

        if path != "/" && path.ends_with('/') {
            return Err(InsertError::TrailingSlash {
                path: path.to_owned(),
            });
        }

        // Every segment is validated before the tree is touched, so a
        // rejected route never leaves nodes behind.
        let segments = if path == "/" {
            Vec::new()
        } else {
            Segment::split(path)?
        };

        let mut current = self
            .trees
            .entry(method.to_owned())
            .or_insert_with(Node::root);

        for segment in segments {
            current = current.child_or_create(segment, path)?;
        }

        current.set_handler(handler, path)
    }

    /// Find the node for the given method and path.
    ///
    /// Lookup descends one tree level per path segment, preferring a static
    /// child, then a regex parameter whose pattern matches, then a named
    /// parameter, then a wildcard. A choice is never revisited, so a path that
    /// fails deeper in the tree is not retried against a less specific
    /// sibling.
    ///
    /// A found node may not carry a handler; use [`Match::handler`] to tell
    /// the two apart.
    pub fn find_route<'r, 'p>(
        &'r self,
        method: &str,
        path: &'p str,
    ) -> Result<Match<'r, 'p, V>, MatchError> {
        let root = match self.trees.get(method) {
            Some(root) => root,
            None => {
                trace!("no routes registered for method {}", method);
                return Err(MatchError::NotFound);
            }
        };

        let mut params = Params::new();

        if path == "/" {
            return Ok(Match { node: root, params });
        }

        let rest = match path.strip_prefix('/') {
            Some(rest) => rest,
            None => {
                trace!("no route for {} {}", method, path);
                return Err(MatchError::NotFound);
            }
        };

        let trimmed = if self.trim_slashes {
            rest.trim_matches('/')
        } else {
            rest
        };

        if trimmed.is_empty() {
            return Ok(Match { node: root, params });
        }

        let mut current = root;

        for segment in trimmed.split('/') {
            current = match current.child_of(segment) {
                Some(child) => child,
                // A wildcard route takes whatever its subtree does not.
                None if current.kind() == NodeKind::Wildcard && current.handler().is_some() => {
                    break
                }
                None => {
                    trace!("no route for {} {}", method, path);
                    return Err(MatchError::NotFound);
                }
            };

            if let Some(name) = current.param_name() {
                params.insert(name, segment);
            }
        }

        Ok(Match {
            node: current,
            params,
        })
    }

    /// Returns `true` if at least one route is registered for `method`.
    pub fn has_method(&self, method: &str) -> bool {
        self.trees.contains_key(method)
    }

    /// Returns the methods that have at least one registered route.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    /// Returns the number of handlers registered across all methods.
    pub fn len(&self) -> usize {
        self.trees.values().map(Node::handler_count).sum()
    }

    /// Returns `true` if no handler has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a handler for GET requests
    pub fn get(&mut self, path: &str, handler: V) -> Result<(), InsertError> {
        self.add_route("GET", path, handler)
    }

    /// Register a handler for HEAD requests
    pub fn head(&mut self, path: &str, handler: V) -> Result<(), InsertError> {
        self.add_route("HEAD", path, handler)
    }

    /// Register a handler for OPTIONS requests
    pub fn options(&mut self, path: &str, handler: V) -> Result<(), InsertError> {
        self.add_route("OPTIONS", path, handler)
    }

    /// Register a handler for POST requests
    pub fn post(&mut self, path: &str, handler: V) -> Result<(), InsertError> {
        self.add_route("POST", path, handler)
    }

    /// Register a handler for PUT requests
    pub fn put(&mut self, path: &str, handler: V) -> Result<(), InsertError> {
        self.add_route("PUT", path, handler)
    }

    /// Register a handler for PATCH requests
    pub fn patch(&mut self, path: &str, handler: V) -> Result<(), InsertError> {
        self.add_route("PATCH", path, handler)
    }

    /// Register a handler for DELETE requests
    pub fn delete(&mut self, path: &str, handler: V) -> Result<(), InsertError> {
        self.add_route("DELETE", path, handler)
    }

    /// Register a handler for CONNECT requests
    pub fn connect(&mut self, path: &str, handler: V) -> Result<(), InsertError> {
        self.add_route("CONNECT", path, handler)
    }

    /// Register a handler for TRACE requests
    pub fn trace(&mut self, path: &str, handler: V) -> Result<(), InsertError> {
        self.add_route("TRACE", path, handler)
    }
}

/// The default router configuration
impl<V> Default for Router<V> {
    fn default() -> Self {
        Self {
            trees: HashMap::new(),
            trim_slashes: true,
        }
    }
}
