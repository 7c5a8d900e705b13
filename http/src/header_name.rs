use smartcow::SmartCow;
use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
};

/// The name of an http header.
///
/// Equality, hashing, and map lookup are ascii-case-insensitive, but
/// the originally provided spelling is retained for serialization.
#[derive(Clone)]
pub struct HeaderName(SmartCow<'static>);

/// the `Cookie` request header
pub const COOKIE: HeaderName = HeaderName(SmartCow::Borrowed("Cookie"));

/// the `Set-Cookie` response header
pub const SET_COOKIE: HeaderName = HeaderName(SmartCow::Borrowed("Set-Cookie"));

impl HeaderName {
    /// the name as provided, original case intact
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for HeaderName {}

impl PartialEq<str> for HeaderName {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for HeaderName {
    fn eq(&self, other: &&str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Hash for HeaderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl From<&'static str> for HeaderName {
    fn from(name: &'static str) -> Self {
        Self(SmartCow::Borrowed(name))
    }
}

impl From<String> for HeaderName {
    fn from(name: String) -> Self {
        Self(SmartCow::Owned(name.into()))
    }
}

impl Display for HeaderName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for HeaderName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}
