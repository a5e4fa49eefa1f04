use std::fmt;

/// Represents errors that can occur when registering a new route.
///
/// Every variant describes a configuration mistake: the route table is
/// expected to be built once at startup, so these are normally surfaced
/// straight out of `main` or caught by tests.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum InsertError {
    /// The route path was empty.
    EmptyPath,
    /// Route paths must begin with `/`.
    MissingLeadingSlash {
        /// The rejected path.
        path: String,
    },
    /// Only the root path `/` may end with a slash.
    TrailingSlash {
        /// The rejected path.
        path: String,
    },
    /// The path contains consecutive slashes.
    EmptySegment {
        /// The rejected path.
        path: String,
    },
    /// A handler is already bound to this exact path.
    Duplicate {
        /// The rejected path.
        path: String,
    },
    /// A parameter and a wildcard were registered at the same position.
    ParamWildcardConflict {
        /// The rejected path.
        path: String,
    },
    /// A parameter was registered under a different name than the one
    /// already declared at the same position.
    ParamNameConflict {
        /// The rejected path.
        path: String,
        /// The segment already registered at that position.
        existing: String,
    },
    /// A regex parameter was registered with a different name or pattern
    /// than the one already declared at the same position.
    RegexConflict {
        /// The rejected path.
        path: String,
        /// The segment already registered at that position.
        existing: String,
    },
    /// Parameters must be registered with a name.
    UnnamedParam {
        /// The rejected path.
        path: String,
    },
    /// A regex parameter is missing its closing parenthesis, or a parameter
    /// name contains parentheses.
    MalformedParam {
        /// The rejected path.
        path: String,
    },
    /// The pattern of a regex parameter failed to compile.
    InvalidRegex {
        /// The rejected path.
        path: String,
        /// The message reported by the regex compiler.
        message: String,
    },
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "route path cannot be empty"),
            Self::MissingLeadingSlash { path } => {
                write!(f, "route path must begin with '/': {}", path)
            }
            Self::TrailingSlash { path } => {
                write!(f, "route path must not end with '/': {}", path)
            }
            Self::EmptySegment { path } => {
                write!(f, "route path contains an empty segment: {}", path)
            }
            Self::Duplicate { path } => {
                write!(f, "a handler is already registered for route: {}", path)
            }
            Self::ParamWildcardConflict { path } => write!(
                f,
                "only one of a parameter and a wildcard may be registered at the same position: {}",
                path
            ),
            Self::ParamNameConflict { path, existing } => write!(
                f,
                "route {} declares a parameter where '{}' is already registered",
                path, existing
            ),
            Self::RegexConflict { path, existing } => write!(
                f,
                "route {} declares a regex parameter where '{}' is already registered",
                path, existing
            ),
            Self::UnnamedParam { path } => {
                write!(f, "parameters must be registered with a name: {}", path)
            }
            Self::MalformedParam { path } => {
                write!(f, "malformed parameter segment in route: {}", path)
            }
            Self::InvalidRegex { path, message } => {
                write!(f, "invalid regex parameter in route {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for InsertError {}

/// A failed match attempt.
///
/// ```
/// use segtree_router::{MatchError, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.get("/home", "Welcome!")?;
///
/// // no routes match
/// if let Err(err) = router.find_route("GET", "/foobar") {
///     assert_eq!(err, MatchError::NotFound);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchError {
    /// No matching route was found.
    NotFound,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matching route not found")
    }
}

impl std::error::Error for MatchError {}
