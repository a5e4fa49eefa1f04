//! A compact HTTP request router built on a segment tree.
//!
//! ```rust
//! use segtree_router::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.get("/home", "Welcome!")?;
//! router.get("/users/:id", "A User")?;
//!
//! let matched = router.find_route("GET", "/users/978")?;
//! assert_eq!(matched.params.get("id"), Some("978"));
//! assert_eq!(matched.handler(), Some(&"A User"));
//! # Ok(())
//! # }
//! ```
//!
//! # Routing
//!
//! The router keeps a separate tree for every HTTP method, so a path
//! registered for `GET` has no effect on `POST` lookups. Each tree level
//! corresponds to one `/`-delimited segment of the path. Four kinds of
//! segment are supported:
//!
//! ```text
//!  Syntax            Type
//!  users             static segment
//!  :name             named parameter
//!  :name(pattern)    named parameter constrained by a regular expression
//!  *                 wildcard
//! ```
//!
//! Named parameters match any non-empty segment and bind it to their name:
//!
//! ```text
//!  Path: /blog/:category/:post
//!
//!  Requests:
//!   /blog/rust/request-routers            match: category="rust", post="request-routers"
//!   /blog/rust                            match, but the node carries no handler
//!   /blog/rust/request-routers/comments   no match
//! ```
//!
//! Regex parameters additionally require the whole segment to match their
//! pattern. The pattern cannot contain `/`:
//!
//! ```text
//!  Path: /users/:id(\d+)
//!
//!  Requests:
//!   /users/42                             match: id="42"
//!   /users/gordon                         no match
//! ```
//!
//! A wildcard matches a single segment without binding it. A wildcard that
//! ends a route also takes everything after it, unless a longer route claims
//! the next segment:
//!
//! ```text
//!  Paths: /static/*, /static/*/meta
//!
//!  Requests:
//!   /static/site.css                      match: /static/*
//!   /static/css/site.css                  match: /static/*
//!   /static/css/meta                      match: /static/*/meta
//!   /static                               match, but the node carries no handler
//! ```
//!
//! # Priority
//!
//! At every level the router takes the first child that applies, in this
//! order: the static child with the exact segment text, the regex child if
//! its pattern matches, the named parameter child, the wildcard child.
//!
//! ```rust
//! use segtree_router::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.get("/user/profile", "profile")?;
//! router.get("/user/:id", "user")?;
//!
//! assert_eq!(router.find_route("GET", "/user/profile")?.handler(), Some(&"profile"));
//! assert_eq!(router.find_route("GET", "/user/gordon")?.handler(), Some(&"user"));
//! # Ok(())
//! # }
//! ```
//!
//! Lookup never backtracks: once a child is chosen, a miss further down the
//! path is a miss for the whole request. Because of this, routes that could
//! not be told apart are rejected when they are registered. A parameter and a
//! wildcard cannot share a position, and every route reaching a position must
//! use the same parameter name there:
//!
//! ```rust
//! use segtree_router::{InsertError, Router};
//!
//! let mut router = Router::new();
//! router.get("/user/:id", "user").unwrap();
//!
//! assert!(matches!(
//!     router.get("/user/*", "any"),
//!     Err(InsertError::ParamWildcardConflict { .. })
//! ));
//! assert!(matches!(
//!     router.get("/user/:name", "user"),
//!     Err(InsertError::ParamNameConflict { .. })
//! ));
//! ```
//!
//! When a route binds the same name more than once, the last segment wins:
//!
//! ```rust
//! use segtree_router::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.get("/user/:id/abc/:id", "nested")?;
//!
//! let matched = router.find_route("GET", "/user/123/abc/456")?;
//! assert_eq!(matched.params.get("id"), Some("456"));
//! # Ok(())
//! # }
//! ```
//!
//! Registration and lookup are not meant to overlap: build the router during
//! startup, then share it read-only with the request handlers.
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod params;
mod router;
mod segment;
mod tree;

pub use error::{InsertError, MatchError};
pub use params::{Params, ParamsIter};
pub use router::{Match, Router};
pub use tree::{Node, NodeKind};
