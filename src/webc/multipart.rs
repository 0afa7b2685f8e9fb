use crate::endpoint::BinaryPart;
use bytes::{Bytes, BytesMut};
use uuid::Uuid;

/// Incremental `multipart/form-data` body writer.
///
/// Each call to `add_field`/`add_binary_part` appends one complete part;
/// `finish` appends the closing boundary. The boundary token is freshly
/// generated per form, so two encodings of the same endpoint differ only by it.
pub(crate) struct MultipartForm {
	boundary: String,
	buf: BytesMut,
	part_count: usize,
}

impl MultipartForm {
	pub fn new() -> Self {
		Self {
			boundary: format!("mingle-{}", Uuid::new_v4().simple()),
			buf: BytesMut::new(),
			part_count: 0,
		}
	}

	pub fn boundary(&self) -> &str {
		&self.boundary
	}

	pub fn content_type(&self) -> String {
		format!("multipart/form-data; boundary={}", self.boundary)
	}

	pub fn part_count(&self) -> usize {
		self.part_count
	}

	pub fn add_field(&mut self, name: &str, value: &str) {
		self.open_part();
		self.put_line(&format!("Content-Disposition: form-data; name=\"{name}\""));
		self.put_line("");
		self.put_line(value);
	}

	pub fn add_binary_part(&mut self, part: &BinaryPart) {
		self.open_part();
		self.put_line(&format!(
			"Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"",
			part.name(),
			part.file_name()
		));
		self.put_line(&format!("Content-Type: {}", part.mime()));
		self.put_line("");
		self.buf.extend_from_slice(part.data());
		self.put_line("");
	}

	pub fn finish(mut self) -> Bytes {
		self.buf.extend_from_slice(b"--");
		self.buf.extend_from_slice(self.boundary.as_bytes());
		self.buf.extend_from_slice(b"--\r\n");
		self.buf.freeze()
	}

	fn open_part(&mut self) {
		self.part_count += 1;
		self.buf.extend_from_slice(b"--");
		self.buf.extend_from_slice(self.boundary.as_bytes());
		self.buf.extend_from_slice(b"\r\n");
	}

	fn put_line(&mut self, line: &str) {
		self.buf.extend_from_slice(line.as_bytes());
		self.buf.extend_from_slice(b"\r\n");
	}
}
