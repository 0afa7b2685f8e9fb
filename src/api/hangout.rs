//! Hangout operations: listing, creation, deletion, like/unlike,
//! participation, and reporting.

use crate::api::StatusResponse;
use crate::endpoint::{
	BinaryPart, ContentType, Endpoint, EndpointBuilder, HttpMethod, ServiceBase, encode_path_segment,
};
use crate::Result;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

// region:    --- Types

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hangout {
	pub id: String,
	pub title: String,
	pub meet_time: String,
	pub language: String,
	pub place_name: String,
	#[serde(default)]
	pub plan: Option<String>,
	pub limit_number: u32,
	#[serde(default)]
	pub image_url: Option<String>,
	#[serde(default)]
	pub state: Option<String>,
	#[serde(default)]
	pub user_has_liked: bool,
	#[serde(default)]
	pub participant_ids: Vec<String>,
	#[serde(default)]
	pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
	pub latitude: f64,
	pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchHangoutsRequest {
	#[serde(default)]
	pub sorting: Option<String>,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub page: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchHangoutsResponse {
	pub status: String,
	#[serde(default)]
	pub data: Vec<Hangout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHangoutRequest {
	pub title: String,
	pub meet_time: String,
	pub language: String,
	pub place_name: String,
	#[serde(default)]
	pub place_address: Option<String>,
	pub plan: String,
	pub limit_number: u32,
	pub latitude: f64,
	pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParticipationRequest {
	pub participate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHangoutRequest {
	pub hangout_id: String,
	pub reason: String,
	#[serde(default)]
	pub detail: Option<String>,
}

// endregion: --- Types

// region:    --- Endpoints

pub fn fetch_hangouts(req: &FetchHangoutsRequest) -> Result<Endpoint<FetchHangoutsResponse>> {
	EndpointBuilder::new(ServiceBase::Api, "hangouts", HttpMethod::Get)
		.query_params(req)
		.build()
}

pub fn create_hangout(req: &CreateHangoutRequest, image: Bytes) -> Result<Endpoint<StatusResponse>> {
	EndpointBuilder::new(ServiceBase::Api, "hangout", HttpMethod::Post)
		.body_params(req)
		.binary_part(BinaryPart::jpeg("hangoutImage", image))
		.content_type(ContentType::Multipart)
		.build()
}

pub fn delete_hangout(hangout_id: &str) -> Result<Endpoint<StatusResponse>> {
	let path = format!("hangout/{}", encode_path_segment(hangout_id));
	EndpointBuilder::new(ServiceBase::Api, path, HttpMethod::Delete).build()
}

/// Like or unlike, decided by `has_liked`. One factory, two explicit paths.
pub fn like_hangout(hangout_id: &str, has_liked: bool) -> Result<Endpoint<StatusResponse>> {
	let id = encode_path_segment(hangout_id);
	let path = if has_liked {
		format!("hangout/like/{id}")
	} else {
		format!("hangout/nolike/{id}")
	};
	EndpointBuilder::new(ServiceBase::Api, path, HttpMethod::Get).build()
}

pub fn update_participation(req: &UpdateParticipationRequest, hangout_id: &str) -> Result<Endpoint<StatusResponse>> {
	let path = format!("hangout/{}", encode_path_segment(hangout_id));
	EndpointBuilder::new(ServiceBase::Api, path, HttpMethod::Put)
		.body_params(req)
		.content_type(ContentType::Multipart)
		.build()
}

pub fn report_hangout(req: &ReportHangoutRequest, images: Option<Vec<Bytes>>) -> Result<Endpoint<StatusResponse>> {
	let mut builder = EndpointBuilder::new(ServiceBase::Api, "report", HttpMethod::Post)
		.body_params(req)
		.content_type(ContentType::Multipart);
	for (idx, data) in images.into_iter().flatten().enumerate() {
		builder = builder.binary_part(BinaryPart::jpeg("reportImage", data).with_file_name(format!("reportImage{idx}.jpg")));
	}
	builder.build()
}

// endregion: --- Endpoints
