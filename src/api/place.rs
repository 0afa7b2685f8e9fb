//! Place operations against the mapping service: text search (with paging)
//! and static map imagery. Wire names follow the Google Places JSON, which is
//! snake_case, so these DTOs take serde's default casing.

use crate::endpoint::{Endpoint, EndpointBuilder, HttpMethod, ServiceBase};
use crate::Result;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

// region:    --- Types

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPlacesRequest {
	pub query: String,
	#[serde(default)]
	pub language: Option<String>,
	pub key: String,
}

/// Follow-up page of a previous search; the token comes from
/// `SearchPlacesResponse::next_page_token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPlacesNextRequest {
	pub pagetoken: String,
	pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPlacesResponse {
	pub status: String,
	#[serde(default)]
	pub results: Vec<Place>,
	#[serde(default)]
	pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
	pub place_id: String,
	pub name: String,
	#[serde(default)]
	pub formatted_address: Option<String>,
	pub geometry: Geometry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
	pub location: Location,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
	pub lat: f64,
	pub lng: f64,
}

/// Static map request. `center` is "lat,lng", `size` is "WIDTHxHEIGHT",
/// `markers` uses the static-maps marker syntax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapImageRequest {
	pub center: String,
	pub zoom: u32,
	pub size: String,
	#[serde(default)]
	pub markers: Option<String>,
	pub key: String,
}

// endregion: --- Types

// region:    --- Endpoints

pub fn search_places(req: &SearchPlacesRequest) -> Result<Endpoint<SearchPlacesResponse>> {
	EndpointBuilder::new(ServiceBase::Maps, "maps/api/place/textsearch/json", HttpMethod::Get)
		.query_params(req)
		.build()
}

pub fn search_places_next(req: &SearchPlacesNextRequest) -> Result<Endpoint<SearchPlacesResponse>> {
	EndpointBuilder::new(ServiceBase::Maps, "maps/api/place/textsearch/json", HttpMethod::Get)
		.query_params(req)
		.build()
}

/// The response is the image bytes themselves; execute with
/// `Client::execute_bytes`.
pub fn fetch_map_image(req: &MapImageRequest) -> Result<Endpoint<Bytes>> {
	EndpointBuilder::new(ServiceBase::Maps, "maps/api/staticmap", HttpMethod::Get)
		.query_params(req)
		.build()
}

// endregion: --- Endpoints
