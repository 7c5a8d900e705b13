use crate::CookieChange;
use cookie::{Cookie, CookieJar};
use std::fmt::{Debug, Formatter};

type ChangeListener = Box<dyn FnMut(&CookieChange)>;

/// An in-memory cookie jar with synchronous change notification.
///
/// The jar is initialized by [`parse`][Cookies::parse]-ing a raw
/// `Cookie` request header, and mutated through [`add`][Cookies::add]
/// and [`remove`][Cookies::remove]. Every mutation invokes each
/// registered change listener exactly once, in registration order,
/// within the same call stack as the mutation. There is no queuing
/// and no coalescing: mutating the same cookie name twice produces
/// two notifications.
///
/// A jar belongs to one in-flight request on one thread, so listeners
/// are not required to be `Send`, and `Cookies` itself is not.
pub struct Cookies {
    jar: CookieJar,
    listeners: Vec<ChangeListener>,
}

impl Cookies {
    /// constructs an empty jar with no listeners
    pub fn new() -> Self {
        Self {
            jar: CookieJar::new(),
            listeners: Vec::new(),
        }
    }

    /// Constructs a jar from a raw `Cookie` request header in
    /// rfc 6265 `name=value; name2=value2` format.
    ///
    /// Parsing is lenient: pairs that do not parse as cookies are
    /// skipped, and an empty header yields an empty jar.
    pub fn parse(header: &str) -> Self {
        let mut jar = CookieJar::new();
        for pair in header.split(';') {
            if let Ok(cookie) = Cookie::parse_encoded(String::from(pair)) {
                jar.add_original(cookie);
            }
        }

        Self {
            jar,
            listeners: Vec::new(),
        }
    }

    /// the cookie with the provided name, if the jar contains one
    pub fn get(&self, name: &str) -> Option<&Cookie<'static>> {
        self.jar.get(name)
    }

    /// iterates over all cookies currently in the jar, in arbitrary
    /// order
    pub fn get_all(&self) -> impl Iterator<Item = &Cookie<'static>> + '_ {
        self.jar.iter()
    }

    /// Adds a cookie to the jar, overwriting any cookie with the same
    /// name.
    ///
    /// Listeners observe a [`CookieChange::Set`] carrying the cookie
    /// verbatim, attributes included.
    pub fn add(&mut self, cookie: impl Into<Cookie<'static>>) {
        let cookie = cookie.into();
        self.jar.add(cookie.clone());
        self.notify(&CookieChange::Set(cookie));
    }

    /// Removes a cookie from the jar.
    ///
    /// The provided cookie names the cookie to remove; any attributes
    /// on it (path, domain, expiry) are the removal's options and
    /// travel with the [`CookieChange::Removed`] notification.
    pub fn remove(&mut self, cookie: impl Into<Cookie<'static>>) {
        let cookie = cookie.into();
        self.jar.remove(cookie.clone());
        self.notify(&CookieChange::removed(cookie));
    }

    /// Registers a change listener, invoked synchronously on every
    /// subsequent [`add`][Self::add] and [`remove`][Self::remove].
    pub fn on_change(&mut self, listener: impl FnMut(&CookieChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, change: &CookieChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}

impl Default for Cookies {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Cookies {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cookies")
            .field("jar", &self.jar)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
