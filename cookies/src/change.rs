use cookie::Cookie;

/// A single observed mutation of a [`Cookies`](crate::Cookies) jar,
/// carrying the affected cookie's name, its new value (absent for a
/// removal), and the effective options the mutation was made with.
#[derive(Debug, Clone, PartialEq)]
pub enum CookieChange {
    /// a cookie was added or overwritten
    Set(Cookie<'static>),

    /// A cookie was removed. The contained cookie has an empty value
    /// and carries the removal's attributes, so expiry/path/domain
    /// attributes that force deletion client-side are preserved.
    Removed(Cookie<'static>),
}

impl CookieChange {
    pub(crate) fn removed(mut cookie: Cookie<'static>) -> Self {
        cookie.set_value("");
        Self::Removed(cookie)
    }

    /// the name of the affected cookie
    pub fn name(&self) -> &str {
        self.cookie().name()
    }

    /// the new value, or `None` when this change is a removal
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Set(cookie) => Some(cookie.value()),
            Self::Removed(_) => None,
        }
    }

    /// the cookie as it will appear in a `Set-Cookie` header,
    /// attributes included
    pub fn cookie(&self) -> &Cookie<'static> {
        match self {
            Self::Set(cookie) | Self::Removed(cookie) => cookie,
        }
    }

    /// serializes this change as one `Set-Cookie` header value, with
    /// standard attribute encoding (`Path`, `Domain`, `Expires`,
    /// `Max-Age`, `HttpOnly`, `Secure`, `SameSite`)
    pub fn set_cookie_value(&self) -> String {
        self.cookie().encoded().to_string()
    }
}
