//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use std::sync::OnceLock;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// region:    --- Tracing

static TRACING: OnceLock<()> = OnceLock::new();

/// Initializes tracing once for the whole test binary (honors `RUST_LOG`).
pub fn init_tracing() {
	TRACING.get_or_init(|| {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.init();
	});
}

// endregion: --- Tracing

// region:    --- One-shot HTTP Server

/// Spawns a local server that answers exactly one request with the given
/// response and then goes away. Returns the base URL to point a client at.
pub async fn spawn_one_shot_server(
	status_line: &'static str,
	content_type: &'static str,
	body: &'static [u8],
) -> Result<String> {
	let (base_url, _rx) = spawn_capture_server(status_line, content_type, body).await?;
	Ok(base_url)
}

/// Same as `spawn_one_shot_server`, but also hands back the raw bytes of the
/// request the server received, for on-the-wire assertions.
pub async fn spawn_capture_server(
	status_line: &'static str,
	content_type: &'static str,
	body: &'static [u8],
) -> Result<(String, oneshot::Receiver<Vec<u8>>)> {
	let listener = TcpListener::bind("127.0.0.1:0").await?;
	let addr = listener.local_addr()?;
	let (tx, rx) = oneshot::channel();

	tokio::spawn(async move {
		let Ok((mut stream, _)) = listener.accept().await else {
			return;
		};
		let request = read_full_request(&mut stream).await;

		let head = format!(
			"HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
			body.len()
		);
		let _ = stream.write_all(head.as_bytes()).await;
		let _ = stream.write_all(body).await;
		let _ = stream.shutdown().await;
		let _ = tx.send(request);
	});

	Ok((format!("http://{addr}/"), rx))
}

/// Reads headers plus (per Content-Length) the body of one HTTP/1.1 request.
async fn read_full_request(stream: &mut tokio::net::TcpStream) -> Vec<u8> {
	let mut buf = Vec::new();
	let mut chunk = [0u8; 4096];
	loop {
		let Ok(n) = stream.read(&mut chunk).await else {
			return buf;
		};
		if n == 0 {
			return buf;
		}
		buf.extend_from_slice(&chunk[..n]);

		if let Some(header_end) = find_subsequence(&buf, b"\r\n\r\n") {
			let body_start = header_end + 4;
			let content_length = parse_content_length(&buf[..header_end]);
			if buf.len() >= body_start + content_length {
				return buf;
			}
		}
	}
}

fn parse_content_length(headers: &[u8]) -> usize {
	let headers = String::from_utf8_lossy(headers);
	headers
		.lines()
		.find_map(|line| {
			let (name, value) = line.split_once(':')?;
			if name.trim().eq_ignore_ascii_case("content-length") {
				value.trim().parse().ok()
			} else {
				None
			}
		})
		.unwrap_or(0)
}

pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	haystack.windows(needle.len()).position(|window| window == needle)
}

// endregion: --- One-shot HTTP Server
