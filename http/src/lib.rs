#![forbid(unsafe_code)]
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!
# crumb-http

The synchronous outgoing-response model for the crumb toolkit. This
crate contains just enough http to accumulate response headers for a
single in-flight request: case-insensitive header names, one-or-many
header values, and an [`OutgoingResponse`] that knows whether its head
has already been sent.

There is intentionally no transport, no body handling, and no async
here. Anything that speaks a socket belongs elsewhere.

## example
```
use crumb_http::{OutgoingResponse, SET_COOKIE};

let mut response = OutgoingResponse::new();
response.headers_mut().append(SET_COOKIE, "a=1");
response.headers_mut().append(SET_COOKIE, "b=2");

let head = response.finalize().unwrap();
assert_eq!(head, "HTTP/1.1 200 OK\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\n\r\n");
assert!(response.headers_sent());
```
*/

mod error;
pub use error::{Error, Result};

mod header_name;
pub use header_name::{HeaderName, COOKIE, SET_COOKIE};

mod header_value;
pub use header_value::HeaderValue;

mod header_values;
pub use header_values::HeaderValues;

mod headers;
pub use headers::Headers;

mod response;
pub use response::{OutgoingResponse, SharedResponse};
