use crate::error::InsertError;

use regex::Regex;

/// A single `/`-delimited element of a route being registered.
#[derive(Debug)]
pub(crate) enum Segment<'a> {
    /// Matched by exact text.
    Static(&'a str),
    /// `:name`
    Param(&'a str),
    /// `:name(pattern)`, anchored so the pattern must match the whole segment.
    Regex {
        name: &'a str,
        pattern: &'a str,
        regex: Regex,
    },
    /// `*`
    Wildcard,
}

impl<'a> Segment<'a> {
    /// Classifies one segment of `route`.
    pub(crate) fn parse(segment: &'a str, route: &str) -> Result<Segment<'a>, InsertError> {
        if segment.is_empty() {
            return Err(InsertError::EmptySegment {
                path: route.to_owned(),
            });
        }

        if segment == "*" {
            return Ok(Segment::Wildcard);
        }

        let rest = match segment.strip_prefix(':') {
            Some(rest) => rest,
            None => return Ok(Segment::Static(segment)),
        };

        let malformed = || InsertError::MalformedParam {
            path: route.to_owned(),
        };

        match rest.find('(') {
            Some(open) => {
                let name = &rest[..open];
                let pattern = rest[open + 1..].strip_suffix(')').ok_or_else(malformed)?;

                if name.is_empty() {
                    return Err(InsertError::UnnamedParam {
                        path: route.to_owned(),
                    });
                }

                if name.contains(')') || pattern.is_empty() {
                    return Err(malformed());
                }

                let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|err| {
                    InsertError::InvalidRegex {
                        path: route.to_owned(),
                        message: err.to_string(),
                    }
                })?;

                Ok(Segment::Regex {
                    name,
                    pattern,
                    regex,
                })
            }
            None => {
                if rest.is_empty() {
                    return Err(InsertError::UnnamedParam {
                        path: route.to_owned(),
                    });
                }

                if rest.contains(')') {
                    return Err(malformed());
                }

                Ok(Segment::Param(rest))
            }
        }
    }

    /// Splits a non-root route into its segments, rejecting the whole route
    /// if any one of them is invalid.
    pub(crate) fn split(route: &'a str) -> Result<Vec<Segment<'a>>, InsertError> {
        route
            .strip_prefix('/')
            .unwrap_or(route)
            .split('/')
            .map(|segment| Segment::parse(segment, route))
            .collect()
    }
}
