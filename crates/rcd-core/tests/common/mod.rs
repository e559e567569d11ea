#![allow(dead_code)]

pub mod fakes;
pub mod http_server;

use rcd_core::http::HttpClient;
use std::time::Duration;

pub fn http_client() -> HttpClient {
    HttpClient::new("rcd-test", Duration::from_secs(5), Duration::from_secs(10))
}

/// File names in `dir`, sorted.
pub fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
