use crate::Cookies;
use crumb_http::{SharedResponse, SET_COOKIE};
use log::trace;

/// Constructs a [`Cookies`] jar from a raw `Cookie` request header
/// and bridges it to the provided response.
///
/// The underlying jar has no mechanism of its own for propagating
/// server-side cookie mutations to the client, so an observer is
/// registered here that mirrors every mutation into the response's
/// `Set-Cookie` header values, synchronously and in mutation order.
/// Any `Set-Cookie` values the response already carries stay in place
/// ahead of the mirrored ones.
///
/// Mutations that happen after the response head has been sent are
/// silently dropped. They cannot reach the client through this
/// channel, so there is nothing useful to raise or retry.
pub fn server_cookies(header: &str, response: SharedResponse) -> Cookies {
    let mut cookies = Cookies::parse(header);

    cookies.on_change(move |change| {
        let mut response = response.borrow_mut();
        if response.headers_sent() {
            return;
        }

        let mut values = response
            .headers()
            .get_values(SET_COOKIE)
            .cloned()
            .unwrap_or_default();

        let value = change.set_cookie_value();
        trace!("mirroring cookie change into response: {value}");
        values.append(value);
        response.headers_mut().insert(SET_COOKIE, values);
    });

    cookies
}

/// Constructs a plain [`Cookies`] jar with no observer, for execution
/// contexts that have no outgoing response to mutate.
pub fn client_cookies() -> Cookies {
    Cookies::new()
}
