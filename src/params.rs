use std::{fmt, slice};

/// A list of parameters returned by a route match.
///
/// Keys are borrowed from the routing tree and values from the request path,
/// so building the list never copies path text. A name appears at most once:
/// when a route binds the same name twice, the later segment wins.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = segtree_router::Router::new();
/// # router.get("/users/:id", true)?;
/// let matched = router.find_route("GET", "/users/1")?;
///
/// // Iterate through the keys and values.
/// for (key, value) in matched.params.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// let id = matched.params.get("id");
/// assert_eq!(id, Some("1"));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Clone, Default)]
pub struct Params<'k, 'v> {
    entries: Vec<(&'k str, &'v str)>,
}

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters in the list.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value bound to the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();

        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, value)| value)
    }

    /// Returns an iterator over the parameters, in the order their names
    /// first appear in the route.
    pub fn iter(&self) -> ParamsIter<'_, 'k, 'v> {
        ParamsIter {
            inner: self.entries.iter(),
        }
    }

    // Binds `value` to `key`, replacing any earlier value for the same key.
    pub(crate) fn insert(&mut self, key: &'k str, value: &'v str) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'ps, 'k, 'v> IntoIterator for &'ps Params<'k, 'v> {
    type Item = (&'k str, &'v str);
    type IntoIter = ParamsIter<'ps, 'k, 'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys and values of a route's [parameters](crate::Params).
pub struct ParamsIter<'ps, 'k, 'v> {
    inner: slice::Iter<'ps, (&'k str, &'v str)>,
}

impl<'ps, 'k, 'v> Iterator for ParamsIter<'ps, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_, '_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let vec = vec![("hello", "hello"), ("world", "world"), ("baz", "baz")];

        let mut params = Params::new();
        for (key, value) in vec.clone() {
            params.insert(key, value);
            assert_eq!(params.get(key), Some(value));
        }

        assert_eq!(params.len(), 3);
        assert!(params.iter().eq(vec));
    }

    #[test]
    fn last_write_wins() {
        let mut params = Params::new();
        params.insert("id", "123");
        params.insert("name", "abc");
        params.insert("id", "456");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("456"));
        assert!(params.iter().eq(vec![("id", "456"), ("name", "abc")]));
    }

    #[test]
    fn empty() {
        let params = Params::new();
        assert!(params.is_empty());
        assert!(params.get("").is_none());
        assert_eq!(format!("{:?}", params), "{}");
    }
}
