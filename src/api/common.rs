use serde::{Deserialize, Serialize};

/// The backend's plain acknowledgment shape, shared by the operations that
/// return no payload (deletes, likes, setting updates, reports).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
	pub status: String,
	#[serde(default)]
	pub message: Option<String>,
}
