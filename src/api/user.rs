//! User operations: session profile, account lifecycle, profile updates, and
//! the per-device settings (GPS opt-in, FCM push token).

use crate::api::StatusResponse;
use crate::endpoint::{BinaryPart, ContentType, Endpoint, EndpointBuilder, HttpMethod, ServiceBase};
use crate::Result;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

// region:    --- Types

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub gender: Option<String>,
	#[serde(default)]
	pub birth: Option<String>,
	#[serde(default)]
	pub nationality: Option<String>,
	#[serde(default)]
	pub affiliation: Option<String>,
	#[serde(default)]
	pub languages: Vec<String>,
	#[serde(default)]
	pub personalities: Vec<String>,
	#[serde(default)]
	pub interests: Vec<String>,
	#[serde(default)]
	pub introduce: Option<String>,
	#[serde(default)]
	pub profile_image_url: Option<String>,
	#[serde(default)]
	pub gps_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchCurrentUserResponse {
	pub status: String,
	pub data: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchProfileRequest {
	pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchProfileResponse {
	pub status: String,
	pub data: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
	pub name: String,
	pub gender: String,
	pub birth: String,
	pub nationality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
	pub status: String,
	pub data: UserProfile,
}

/// Profile update. List-valued traits travel as comma-joined strings: both
/// form encodings here are flat key/value, so the backend splits server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
	#[serde(default)]
	pub affiliation: Option<String>,
	#[serde(default)]
	pub introduce: Option<String>,
	#[serde(default)]
	pub languages: Option<String>,
	#[serde(default)]
	pub personalities: Option<String>,
	#[serde(default)]
	pub interests: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGpsSettingRequest {
	pub gps: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFcmTokenRequest {
	pub fcm_token: String,
}

// endregion: --- Types

// region:    --- Endpoints

pub fn fetch_current_user() -> Result<Endpoint<FetchCurrentUserResponse>> {
	EndpointBuilder::new(ServiceBase::Api, "auth/login", HttpMethod::Get).build()
}

pub fn fetch_user_profile(req: &FetchProfileRequest) -> Result<Endpoint<FetchProfileResponse>> {
	EndpointBuilder::new(ServiceBase::Api, "auth/login", HttpMethod::Get)
		.query_params(req)
		.build()
}

pub fn create_user(req: &CreateUserRequest, profile_image: Option<Bytes>) -> Result<Endpoint<CreateUserResponse>> {
	let mut builder = EndpointBuilder::new(ServiceBase::Api, "user/", HttpMethod::Post)
		.body_params(req)
		.content_type(ContentType::Multipart);
	if let Some(data) = profile_image {
		builder = builder.binary_part(BinaryPart::jpeg("profileImage", data));
	}
	builder.build()
}

pub fn delete_user() -> Result<Endpoint<StatusResponse>> {
	EndpointBuilder::new(ServiceBase::Api, "user", HttpMethod::Delete).build()
}

pub fn update_profile(req: &UpdateProfileRequest, profile_image: Option<Bytes>) -> Result<Endpoint<StatusResponse>> {
	let mut builder = EndpointBuilder::new(ServiceBase::Api, "user", HttpMethod::Put)
		.body_params(req)
		.content_type(ContentType::Multipart);
	if let Some(data) = profile_image {
		builder = builder.binary_part(BinaryPart::jpeg("profileImage", data));
	}
	builder.build()
}

pub fn update_gps_setting(req: &UpdateGpsSettingRequest) -> Result<Endpoint<StatusResponse>> {
	EndpointBuilder::new(ServiceBase::Api, "place/gps", HttpMethod::Put)
		.body_params(req)
		.content_type(ContentType::UrlEncoded)
		.build()
}

pub fn update_fcm_token(req: &UpdateFcmTokenRequest) -> Result<Endpoint<StatusResponse>> {
	EndpointBuilder::new(ServiceBase::Api, "user/fcmToken", HttpMethod::Put)
		.body_params(req)
		.content_type(ContentType::UrlEncoded)
		.build()
}

// endregion: --- Endpoints
