use crate::HeaderValue;
use smallvec::{smallvec, SmallVec};
use std::{
    fmt::{Debug, Display, Formatter},
    iter::FromIterator,
    ops::{Deref, DerefMut},
};

/// An ordered collection of one or more [`HeaderValue`]s.
///
/// Most headers hold exactly one value, so a single value is stored
/// inline. Append order is preserved, which is load-bearing for
/// `Set-Cookie`.
#[derive(Clone, Eq, PartialEq)]
pub struct HeaderValues(SmallVec<[HeaderValue; 1]>);

impl HeaderValues {
    /// constructs an empty HeaderValues
    pub fn new() -> Self {
        Self(SmallVec::with_capacity(1))
    }

    /// a reference to the "single" value: the most recently appended
    ///
    /// # Panics
    ///
    /// Panics if this HeaderValues is empty, which never happens for
    /// values retrieved from a [`Headers`](crate::Headers) map.
    pub fn one(&self) -> &HeaderValue {
        self.0.last().expect("HeaderValues was empty")
    }

    /// the single value as a str, if it is utf8
    pub fn as_str(&self) -> Option<&str> {
        self.one().as_str()
    }

    /// appends a value, retaining any previous values
    pub fn append(&mut self, value: impl Into<HeaderValue>) {
        self.0.push(value.into());
    }

    /// appends any number of values, retaining any previous values
    pub fn extend(&mut self, values: impl Into<HeaderValues>) {
        let values = values.into();
        self.0.extend(values);
    }
}

impl Default for HeaderValues {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HeaderValues {
    type Target = [HeaderValue];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for HeaderValues {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Debug for HeaderValues {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.len() == 1 {
            Debug::fmt(self.one(), f)
        } else {
            f.debug_list().entries(&self.0).finish()
        }
    }
}

impl Display for HeaderValues {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.one(), f)
    }
}

impl IntoIterator for HeaderValues {
    type Item = HeaderValue;
    type IntoIter = smallvec::IntoIter<[HeaderValue; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<I> FromIterator<I> for HeaderValues
where
    I: Into<HeaderValue>,
{
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<HeaderValue> for HeaderValues {
    fn from(value: HeaderValue) -> Self {
        Self(smallvec![value])
    }
}

impl From<String> for HeaderValues {
    fn from(value: String) -> Self {
        Self(smallvec![value.into()])
    }
}

impl From<&'static str> for HeaderValues {
    fn from(value: &'static str) -> Self {
        Self(smallvec![value.into()])
    }
}

impl From<u64> for HeaderValues {
    fn from(value: u64) -> Self {
        Self(smallvec![value.into()])
    }
}

impl<HV> From<Vec<HV>> for HeaderValues
where
    HV: Into<HeaderValue>,
{
    fn from(values: Vec<HV>) -> Self {
        Self(values.into_iter().map(Into::into).collect())
    }
}
