use crate::{HeaderName, HeaderValue, HeaderValues};
use hashbrown::HashMap;
use std::{
    fmt::{Debug, Display, Formatter},
    iter::FromIterator,
};

/// A collection of http headers, mapping each name to one or more
/// values.
///
/// Lookup is ascii-case-insensitive. The spelling a name was first
/// provided with is the spelling that serializes.
#[derive(Debug, Clone, Default)]
pub struct Headers(HashMap<HeaderName, HeaderValues>);

impl Headers {
    /// constructs an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// constructs an empty header map with the provided capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity(capacity))
    }

    /// the number of distinct header names
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// predicate function to check whether this map contains no
    /// headers
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// sets the values for this header name, replacing any values
    /// previously held under the same name
    pub fn insert(&mut self, name: impl Into<HeaderName>, values: impl Into<HeaderValues>) {
        self.0.insert(name.into(), values.into());
    }

    /// appends the provided values to any values already held under
    /// this name
    pub fn append(&mut self, name: impl Into<HeaderName>, values: impl Into<HeaderValues>) {
        self.0
            .entry(name.into())
            .or_insert_with(HeaderValues::new)
            .extend(values);
    }

    /// all values held under this name, in append order
    pub fn get_values(&self, name: impl Into<HeaderName>) -> Option<&HeaderValues> {
        self.0.get(&name.into())
    }

    /// the single value for this name, if there is at least one and
    /// the most recently appended one is utf8
    pub fn get_str(&self, name: impl Into<HeaderName>) -> Option<&str> {
        self.get_values(name).and_then(HeaderValues::as_str)
    }

    /// the single (most recently appended) value for this name
    pub fn get(&self, name: impl Into<HeaderName>) -> Option<&HeaderValue> {
        self.get_values(name).map(HeaderValues::one)
    }

    /// removes and returns any values held under this name
    pub fn remove(&mut self, name: impl Into<HeaderName>) -> Option<HeaderValues> {
        self.0.remove(&name.into())
    }

    /// predicate function to check whether any value is held under
    /// this name
    pub fn has_header(&self, name: impl Into<HeaderName>) -> bool {
        self.0.contains_key(&name.into())
    }

    /// iterates over all (name, values) pairs, in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValues)> + '_ {
        self.0.iter()
    }
}

impl Display for Headers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (name, values) in self.iter() {
            for value in values.iter() {
                write!(f, "{name}: {value}\r\n")?;
            }
        }
        Ok(())
    }
}

impl<HN, HV> FromIterator<(HN, HV)> for Headers
where
    HN: Into<HeaderName>,
    HV: Into<HeaderValues>,
{
    fn from_iter<T: IntoIterator<Item = (HN, HV)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, values) in iter {
            headers.append(name, values);
        }
        headers
    }
}

impl<HN, HV> Extend<(HN, HV)> for Headers
where
    HN: Into<HeaderName>,
    HV: Into<HeaderValues>,
{
    fn extend<T: IntoIterator<Item = (HN, HV)>>(&mut self, iter: T) {
        for (name, values) in iter {
            self.append(name, values);
        }
    }
}
