//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed responses keyed by request target (path plus query, falling
//! back to path only) and records every request target it sees. Unknown
//! targets get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: Vec<u8>,
    pub headers: Vec<(String, String)>,
    /// Send only this many body bytes, then hold the connection for the duration.
    pub stall: Option<(usize, Duration)>,
}

impl Route {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            headers: Vec::new(),
            stall: None,
        }
    }

    /// Full `Content-Length` for `body`, but only `sent` bytes before a `pause`.
    pub fn stalled(body: impl Into<Vec<u8>>, sent: usize, pause: Duration) -> Self {
        Self {
            stall: Some((sent, pause)),
            ..Self::ok(body)
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            headers: Vec::new(),
            stall: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            body: Vec::new(),
            headers: vec![("Location".to_string(), location.to_string())],
            stall: None,
        }
    }
}

pub struct TestServer {
    base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Starts a server in a background thread. It runs until the process exits.
    pub fn start(routes: Vec<(&str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Arc<HashMap<String, Route>> = Arc::new(
            routes
                .into_iter()
                .map(|(target, route)| (target.to_string(), route))
                .collect(),
        );
        let hits = Arc::new(Mutex::new(Vec::new()));
        let hits_bg = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let hits = Arc::clone(&hits_bg);
                thread::spawn(move || handle(stream, &routes, &hits));
            }
        });
        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            hits,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, target: &str) -> String {
        format!("{}{}", self.base_url, target)
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    pub fn hit_count(&self, target: &str) -> usize {
        self.hits().iter().filter(|h| h.as_str() == target).count()
    }
}

fn read_request(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 || data.len() > 64 * 1024 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }
    String::from_utf8(data).ok()
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, hits: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    hits.lock().unwrap().push(target.clone());

    let path = target.split('?').next().unwrap_or("/");
    let route = routes
        .get(&target)
        .or_else(|| routes.get(path))
        .cloned()
        .unwrap_or_else(|| Route::status(404));

    let mut head = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.body.len()
    );
    for (name, value) in &route.headers {
        head.push_str(&format!("{name}: {value}\r\n"));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    if let Some((sent, pause)) = route.stall {
        let sent = sent.min(route.body.len());
        let _ = stream.write_all(&route.body[..sent]);
        let _ = stream.flush();
        thread::sleep(pause);
        let _ = stream.write_all(&route.body[sent..]);
    } else {
        let _ = stream.write_all(&route.body);
    }
    let _ = stream.flush();
}
