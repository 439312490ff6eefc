//! Raw request/response dump for `--trace`

use reqwest::header::{HeaderMap, HeaderName};
use reqwest::{Method, StatusCode, Version};
use url::Url;

/// `Content-Type` style spelling of a (lowercase) header name.
pub fn canonical_header_name(name: &HeaderName) -> String {
    name.as_str()
        .split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Request line followed by one line per header.
pub fn request_lines(method: &Method, url: &Url, headers: &HeaderMap) -> Vec<String> {
    let mut lines = vec![format!("{method} {url}")];
    lines.extend(headers.iter().map(|(name, value)| {
        format!(
            "{}: {}",
            canonical_header_name(name),
            String::from_utf8_lossy(value.as_bytes())
        )
    }));
    lines
}

/// Status line followed by the body as received.
pub fn response_lines(version: Version, status: StatusCode, body: &[u8]) -> Vec<String> {
    vec![
        format!("{version:?} {status}"),
        String::from_utf8_lossy(body).into_owned(),
    ]
}

pub fn print_request(method: &Method, url: &Url, headers: &HeaderMap) {
    for line in request_lines(method, url, headers) {
        println!("{line}");
    }
    println!();
}

pub fn print_response(version: Version, status: StatusCode, body: &[u8]) {
    for line in response_lines(version, status, body) {
        println!("{line}");
    }
    println!();
}
