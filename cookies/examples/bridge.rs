use crumb_cookies::{cookie::Cookie, server_cookies};
use crumb_http::OutgoingResponse;

pub fn main() {
    env_logger::init();

    let response = OutgoingResponse::new().into_shared();
    let mut cookies = server_cookies("theme=dark", response.clone());

    if let Some(theme) = cookies.get("theme") {
        println!("current theme: {}", theme.value());
    }

    cookies.add(Cookie::build(("visits", "1")).path("/"));
    cookies.remove("theme");

    match response.borrow_mut().finalize() {
        Ok(head) => println!("{head}"),
        Err(e) => eprintln!("{e}"),
    };
}
