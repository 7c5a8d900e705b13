#![forbid(unsafe_code)]
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!

# the crumb cookie bridge

One cookie accessor for request-handling code, identical in shape
whether or not an outgoing response exists.

Server-side, [`server_cookies`] parses the incoming `Cookie` header
into a [`Cookies`] jar and registers an observer on it: every jar
mutation is mirrored, synchronously and in mutation order, into the
response's `Set-Cookie` header values. Once the response head has been
sent, late mutations are silently dropped, since they can no longer
reach the client through that channel.

Client-side (or anywhere without an outgoing response),
[`client_cookies`] constructs a plain jar with no observer.

## example
```
use crumb_cookies::{cookie::Cookie, server_cookies};
use crumb_http::{OutgoingResponse, SET_COOKIE};

let response = OutgoingResponse::new().into_shared();
let mut cookies = server_cookies("theme=dark", response.clone());

assert_eq!(cookies.get("theme").map(Cookie::value), Some("dark"));

cookies.add(Cookie::build(("session", "opaque")).path("/"));

let response = response.borrow();
let values = response.headers().get_values(SET_COOKIE).unwrap();
assert_eq!(values[0], "session=opaque; Path=/");
```
*/

mod change;
pub use change::CookieChange;

mod jar;
pub use jar::Cookies;

mod bridge;
pub use bridge::{client_cookies, server_cookies};

pub use cookie;
