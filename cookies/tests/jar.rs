use crumb_cookies::{client_cookies, cookie::Cookie, CookieChange, Cookies};
use pretty_assertions::assert_eq;
use std::{cell::RefCell, rc::Rc};

#[test]
fn listeners_fire_synchronously_in_registration_order() {
    let observed = Rc::new(RefCell::new(Vec::new()));
    let mut cookies = Cookies::new();

    let first = observed.clone();
    cookies.on_change(move |change| {
        first.borrow_mut().push(format!("first: {}", change.name()));
    });

    let second = observed.clone();
    cookies.on_change(move |change| {
        second.borrow_mut().push(format!("second: {}", change.name()));
    });

    cookies.add(("a", "1"));
    // both listeners have already run within the add call stack
    assert_eq!(*observed.borrow(), ["first: a", "second: a"]);

    cookies.remove("a");
    assert_eq!(
        *observed.borrow(),
        ["first: a", "second: a", "first: a", "second: a"]
    );
}

#[test]
fn change_carries_value_and_options() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let mut cookies = Cookies::new();

    let sink = changes.clone();
    cookies.on_change(move |change| sink.borrow_mut().push(change.clone()));

    cookies.add(Cookie::build(("a", "1")).path("/admin"));
    cookies.remove(Cookie::build(("a", "1")).path("/admin"));

    let changes = changes.borrow();
    assert_eq!(changes.len(), 2);

    match &changes[0] {
        CookieChange::Set(cookie) => {
            assert_eq!(cookie.name(), "a");
            assert_eq!(cookie.value(), "1");
            assert_eq!(cookie.path(), Some("/admin"));
        }
        other => panic!("expected Set, got {other:?}"),
    }
    assert_eq!(changes[0].value(), Some("1"));

    match &changes[1] {
        CookieChange::Removed(cookie) => {
            assert_eq!(cookie.name(), "a");
            assert_eq!(cookie.value(), "");
            assert_eq!(cookie.path(), Some("/admin"));
        }
        other => panic!("expected Removed, got {other:?}"),
    }
    assert_eq!(changes[1].value(), None);
    assert_eq!(changes[1].set_cookie_value(), "a=; Path=/admin");
}

#[test]
fn client_jar_has_no_observer_and_just_holds_state() {
    let mut cookies = client_cookies();
    assert_eq!(cookies.get_all().count(), 0);

    cookies.add(("a", "1"));
    assert_eq!(cookies.get("a").map(Cookie::value), Some("1"));

    cookies.remove("a");
    assert!(cookies.get("a").is_none());
}

#[test]
fn overwriting_updates_the_jar_state() {
    let mut cookies = Cookies::parse("a=1");
    cookies.add(("a", "2"));
    assert_eq!(cookies.get("a").map(Cookie::value), Some("2"));
    assert_eq!(cookies.get_all().count(), 1);
}
