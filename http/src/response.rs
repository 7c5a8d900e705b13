use crate::{Error, Headers, Result};
use log::trace;
use std::{cell::RefCell, rc::Rc};

/// A shared single-threaded handle to an [`OutgoingResponse`].
///
/// One response belongs to exactly one in-flight request and is never
/// accessed from another thread, so interior mutability through
/// [`RefCell`] suffices and no locking is involved.
pub type SharedResponse = Rc<RefCell<OutgoingResponse>>;

/// The head of an outgoing http response: a status code and a header
/// map, along with whether that head has been transmitted yet.
///
/// Headers can be accumulated freely until [`finalize`][Self::finalize]
/// is called, at which point the head is serialized exactly once.
/// Callers that might mutate headers late should consult
/// [`headers_sent`][Self::headers_sent] first.
#[derive(Debug, Clone)]
pub struct OutgoingResponse {
    status: u16,
    headers: Headers,
    sent: bool,
}

impl Default for OutgoingResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl OutgoingResponse {
    /// constructs a new response with status 200 and no headers
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: Headers::new(),
            sent: false,
        }
    }

    /// constructs a new response with the provided status
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Self::new()
        }
    }

    /// the response status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// sets the response status code
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// a reference to the response headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// a mutable reference to the response headers
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// whether the response head has already been serialized, and
    /// header mutation therefore can no longer reach the client
    pub fn headers_sent(&self) -> bool {
        self.sent
    }

    /// wraps this response in a [`SharedResponse`] handle
    pub fn into_shared(self) -> SharedResponse {
        Rc::new(RefCell::new(self))
    }

    /// Serializes the response head (status line and headers) and
    /// marks the head as sent.
    ///
    /// Returns [`Error::HeadersAlreadySent`] on any call after the
    /// first.
    pub fn finalize(&mut self) -> Result<String> {
        if self.sent {
            return Err(Error::HeadersAlreadySent);
        }
        self.sent = true;

        let mut head = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status,
            canonical_reason(self.status)
        );
        head.push_str(&self.headers.to_string());
        head.push_str("\r\n");
        trace!("finalized response head, {} bytes", head.len());
        Ok(head)
    }
}

fn canonical_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Unknown",
    }
}
