use smallvec::SmallVec;
use smartcow::SmartCow;
use smartstring::alias::String as SmartString;
use std::fmt::{Debug, Display, Formatter, Write};

/// A single http header value.
///
/// Header values are usually utf8, but nothing in http requires them
/// to be, so raw bytes are representable as well.
#[derive(Eq, PartialEq, Clone)]
pub enum HeaderValue {
    /// a utf8 header value
    Utf8(SmartCow<'static>),
    /// a header value that is not valid utf8
    Bytes(SmallVec<[u8; 32]>),
}

impl HeaderValue {
    /// the value as a str, if it is utf8
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Utf8(utf8) => Some(utf8),
            HeaderValue::Bytes(_) => None,
        }
    }
}

impl AsRef<[u8]> for HeaderValue {
    fn as_ref(&self) -> &[u8] {
        match self {
            HeaderValue::Utf8(utf8) => utf8.as_bytes(),
            HeaderValue::Bytes(bytes) => bytes,
        }
    }
}

impl Debug for HeaderValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderValue::Utf8(utf8) => Debug::fmt(&**utf8, f),
            HeaderValue::Bytes(bytes) => Debug::fmt(&String::from_utf8_lossy(bytes), f),
        }
    }
}

impl Display for HeaderValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderValue::Utf8(utf8) => f.write_str(utf8),
            HeaderValue::Bytes(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

impl From<Vec<u8>> for HeaderValue {
    fn from(value: Vec<u8>) -> Self {
        match String::from_utf8(value) {
            Ok(string) => Self::Utf8(SmartCow::Owned(string.into())),
            Err(e) => Self::Bytes(e.into_bytes().into()),
        }
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::Utf8(SmartCow::Owned(value.into()))
    }
}

impl From<&'static str> for HeaderValue {
    fn from(value: &'static str) -> Self {
        Self::Utf8(SmartCow::Borrowed(value))
    }
}

impl From<u64> for HeaderValue {
    fn from(value: u64) -> Self {
        let mut string = SmartString::new();
        let _ = write!(string, "{value}");
        Self::Utf8(SmartCow::Owned(string))
    }
}

impl PartialEq<str> for HeaderValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for HeaderValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for HeaderValue {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(&**other)
    }
}

impl PartialEq<str> for &HeaderValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}
