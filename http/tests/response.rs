use crumb_http::{Error, OutgoingResponse, SET_COOKIE};
use pretty_assertions::assert_str_eq;

#[test]
fn finalize_serializes_the_head_once() {
    let mut response = OutgoingResponse::new();
    response.headers_mut().append(SET_COOKIE, "a=1");
    response.headers_mut().append(SET_COOKIE, "b=2");

    assert!(!response.headers_sent());
    let head = response.finalize().unwrap();
    assert_str_eq!(
        head,
        "HTTP/1.1 200 OK\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\n\r\n"
    );
    assert!(response.headers_sent());

    assert_eq!(response.finalize(), Err(Error::HeadersAlreadySent));
}

#[test]
fn status_is_reflected_in_the_status_line() {
    let mut response = OutgoingResponse::with_status(404);
    assert_eq!(response.status(), 404);
    let head = response.finalize().unwrap();
    assert_str_eq!(head, "HTTP/1.1 404 Not Found\r\n\r\n");
}

#[test]
fn set_status_overrides_the_construction_status() {
    let mut response = OutgoingResponse::new();
    response.set_status(204);
    let head = response.finalize().unwrap();
    assert_str_eq!(head, "HTTP/1.1 204 No Content\r\n\r\n");
}

#[test]
fn shared_handle_observes_mutation() {
    let shared = OutgoingResponse::new().into_shared();
    shared.borrow_mut().headers_mut().insert(SET_COOKIE, "a=1");
    assert!(shared.borrow().headers().has_header(SET_COOKIE));
    assert!(!shared.borrow().headers_sent());
}
