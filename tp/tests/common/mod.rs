//! Loopback HTTP server for integration tests
//!
//! Accepts one connection, captures the request and answers with a canned
//! response.

#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Request as seen by the server
#[derive(Debug)]
pub struct CapturedRequest {
    /// Request line and headers
    pub head: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim().eq_ignore_ascii_case(name).then(|| value.trim().to_string())
        })
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

/// Base URL of the server and a handle resolving to the captured request
pub async fn serve_once(status: u16, content_type: &str, body: &str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    let content_type = content_type.to_string();
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("Failed to accept");

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let (head_end, content_length) = loop {
            let n = stream.read(&mut chunk).await.expect("Failed to read");
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_string();
                let length = head
                    .lines()
                    .filter_map(|l| l.split_once(':'))
                    .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                break (pos + 4, length);
            }
        };

        while buf.len() < head_end + content_length {
            let n = stream.read(&mut chunk).await.expect("Failed to read body");
            assert!(n > 0, "connection closed before body");
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {} X\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.expect("Failed to write");
        let _ = stream.shutdown().await;

        CapturedRequest {
            head: String::from_utf8_lossy(&buf[..head_end - 4]).to_string(),
            body: buf[head_end..head_end + content_length].to_vec(),
        }
    });

    (format!("http://{}", addr), handle)
}

pub fn plan_json() -> String {
    serde_json::json!({
        "title": "Kyoto in Three Days",
        "summary": "Temples, tea and ramen",
        "itinerary": [
            {
                "day": 1,
                "location": {
                    "name": "Fushimi Inari",
                    "description": "Thousands of torii gates",
                    "city": "Kyoto",
                    "lat": 34.9671,
                    "lng": 135.7727
                },
                "activities": [
                    {"name": "Summit hike", "description": "Walk the gates to the top", "price": 0}
                ],
                "restaurant": {"name": "Vermillion", "description": "Coffee by the shrine", "price_range": "$"}
            },
            {
                "day": 2,
                "location": {
                    "name": "Gion",
                    "description": "Old merchant quarter",
                    "city": "Kyoto",
                    "lat": 35.0037,
                    "lng": 135.7788
                },
                "activities": [
                    {"name": "Tea ceremony", "description": "Matcha in a machiya", "price": 45}
                ],
                "restaurant": {"name": "Izuju", "description": "Sushi since 1912", "price_range": "$$"}
            }
        ]
    })
    .to_string()
}
