use bytes::Bytes;

/// One raw byte blob attached to a multipart endpoint (typically an image).
#[derive(Debug, Clone)]
pub struct BinaryPart {
	name: String,
	file_name: String,
	mime: String,
	data: Bytes,
}

/// Constructors
impl BinaryPart {
	pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
		let name = name.into();
		let file_name = format!("{name}.bin");
		Self {
			name,
			file_name,
			mime: "application/octet-stream".to_string(),
			data: data.into(),
		}
	}

	/// A JPEG image part, the common case for profile and hangout images.
	pub fn jpeg(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
		let name = name.into();
		let file_name = format!("{name}.jpg");
		Self {
			name,
			file_name,
			mime: "image/jpeg".to_string(),
			data: data.into(),
		}
	}

	#[must_use]
	pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
		self.file_name = file_name.into();
		self
	}

	#[must_use]
	pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
		self.mime = mime.into();
		self
	}
}

/// Getters
impl BinaryPart {
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn file_name(&self) -> &str {
		&self.file_name
	}

	#[must_use]
	pub fn mime(&self) -> &str {
		&self.mime
	}

	#[must_use]
	pub fn data(&self) -> &Bytes {
		&self.data
	}
}
