//! Minimal loopback HTTP server serving one canned response.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// A server that answers exactly one request and then exits.
#[allow(dead_code)]
pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<String>,
}

#[allow(dead_code)]
impl OneShotServer {
    /// Serve `body` with the given status line (e.g. `200 OK`) at `/<path>`.
    pub fn start(status: &str, path: &str, body: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind loopback port");
        let addr = listener.local_addr().expect("No local address");
        let status = status.to_string();

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("Failed to accept connection");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let header = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/zip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();

            String::from_utf8_lossy(&request).into_owned()
        });

        Self {
            url: format!("http://{addr}/{path}"),
            handle,
        }
    }

    /// Wait for the request and return its raw head.
    pub fn request(self) -> String {
        self.handle.join().expect("Server thread panicked")
    }
}

/// An HTTP client that ignores proxy settings from the environment.
#[allow(dead_code)]
pub fn loopback_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client")
}
