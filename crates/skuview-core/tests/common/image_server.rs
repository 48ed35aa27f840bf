//! Minimal HTTP/1.1 server answering HEAD for integration tests.
//!
//! Paths listed as present get `200 OK`, paths listed as slow stall before
//! answering (to trip client timeouts), everything else gets `404`. Every
//! request path (query stripped) is recorded.

use std::collections::HashSet;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct ImageServerOptions {
    /// Paths (e.g. "/img/K-1-6392/K-1-6392_01.jpg") answered with 200.
    pub present: Vec<String>,
    /// Paths that stall for `stall` before answering 200.
    pub slow: Vec<String>,
    pub stall: Duration,
    /// Status used for present paths instead of 200 (e.g. 302 without Location, 204).
    pub present_status: Option<&'static str>,
}

pub struct ImageServer {
    /// Base URL of the image directory, e.g. "http://127.0.0.1:12345/img".
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ImageServer {
    /// Request paths seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(opts: ImageServerOptions) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let present: Arc<HashSet<String>> = Arc::new(opts.present.iter().cloned().collect());
    let slow: Arc<HashSet<String>> = Arc::new(opts.slow.iter().cloned().collect());
    let stall = opts.stall;
    let present_status = opts.present_status.unwrap_or("200 OK");
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let present = Arc::clone(&present);
            let slow = Arc::clone(&slow);
            let seen = Arc::clone(&seen);
            thread::spawn(move || {
                handle(stream, &present, &slow, stall, present_status, &seen)
            });
        }
    });
    ImageServer {
        base_url: format!("http://127.0.0.1:{}/img", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    present: &HashSet<String>,
    slow: &HashSet<String>,
    stall: Duration,
    present_status: &str,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);
    seen.lock().unwrap().push(path.to_string());

    if !method.eq_ignore_ascii_case("HEAD") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nConnection: close\r\n\r\n");
        return;
    }
    let status = if slow.contains(path) {
        thread::sleep(stall);
        "200 OK"
    } else if present.contains(path) {
        present_status
    } else {
        "404 Not Found"
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: image/jpeg\r\nContent-Length: 1024\r\nConnection: close\r\n\r\n",
        status
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Returns (method, path without query) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");
    let path = target.split('?').next().unwrap_or(target);
    (method, path)
}
