mod support;

use crate::support::find_subsequence;
use bytes::Bytes;
use mingle::api::{hangout, place, user};
use mingle::endpoint::{EndpointBuilder, HttpMethod, ServiceBase};
use mingle::{Client, Error};
use serde::Serialize;
use url::Url;
type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

// region:    --- Url Encoded

#[test]
fn test_urlencoded_body_ok() -> Result<()> {
	let client = Client::default();
	let endpoint = user::update_gps_setting(&user::UpdateGpsSettingRequest { gps: true })?;

	let web_req = client.to_web_request(&endpoint)?;

	let body = web_req.body.as_deref().unwrap_or_default();
	assert_eq!(body, b"gps=true".as_slice());

	let content_type = header_value(&web_req.headers, "Content-Type").unwrap_or_default();
	assert_eq!(content_type, "application/x-www-form-urlencoded");
	// Never a multipart boundary under url-encoding.
	assert!(!content_type.contains("boundary"));

	Ok(())
}

#[test]
fn test_urlencoded_idempotent_ok() -> Result<()> {
	let client = Client::default();
	let endpoint = user::update_fcm_token(&user::UpdateFcmTokenRequest {
		fcm_token: "tok-123".to_string(),
	})?;

	let first = client.to_web_request(&endpoint)?;
	let second = client.to_web_request(&endpoint)?;

	assert_eq!(first.url, second.url);
	assert_eq!(first.headers, second.headers);
	assert_eq!(first.body, second.body);

	Ok(())
}

// endregion: --- Url Encoded

// region:    --- Query Params

#[test]
fn test_query_roundtrip_ok() -> Result<()> {
	let client = Client::default();
	let req = place::SearchPlacesRequest {
		query: "coffee & crêpes".to_string(),
		language: Some("en".to_string()),
		key: "maps-key".to_string(),
	};
	let endpoint = place::search_places(&req)?;

	let web_req = client.to_web_request(&endpoint)?;

	// Parse the produced query string back; the pair set must survive.
	let url = Url::parse(web_req.url.as_str())?;
	let mut pairs: Vec<(String, String)> = url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
	pairs.sort();

	assert_eq!(
		pairs,
		vec![
			("key".to_string(), "maps-key".to_string()),
			("language".to_string(), "en".to_string()),
			("query".to_string(), "coffee & crêpes".to_string()),
		]
	);

	Ok(())
}

#[test]
fn test_none_params_skipped_ok() -> Result<()> {
	let client = Client::default();
	let endpoint = hangout::fetch_hangouts(&hangout::FetchHangoutsRequest {
		sorting: Some("latest".to_string()),
		category: None,
		page: None,
	})?;

	let web_req = client.to_web_request(&endpoint)?;

	assert_eq!(web_req.url.query(), Some("sorting=latest"));

	Ok(())
}

#[test]
fn test_service_base_origin_resolution_ok() -> Result<()> {
	// Each endpoint names its base explicitly; the config resolves it.
	let client = Client::builder()
		.with_api_base_url("https://backend.test/")
		.with_maps_base_url("https://maps.test/")
		.build();

	let api_req = client.to_web_request(&user::fetch_current_user()?)?;
	assert_eq!(api_req.url.as_str(), "https://backend.test/auth/login");

	let maps_req = client.to_web_request(&place::search_places_next(&place::SearchPlacesNextRequest {
		pagetoken: "tok".to_string(),
		key: "k".to_string(),
	})?)?;
	assert_eq!(maps_req.url.host_str(), Some("maps.test"));
	assert_eq!(maps_req.url.path(), "/maps/api/place/textsearch/json");

	Ok(())
}

// endregion: --- Query Params

// region:    --- Multipart

#[test]
fn test_multipart_part_count_ok() -> Result<()> {
	let client = Client::default();
	let req = user::CreateUserRequest {
		name: "Nari".to_string(),
		gender: "female".to_string(),
		birth: "1998-04-02".to_string(),
		nationality: "KR".to_string(),
	};
	let endpoint = user::create_user(&req, Some(Bytes::from_static(b"fake-jpeg")))?;

	let web_req = client.to_web_request(&endpoint)?;
	let body = web_req.body.as_deref().unwrap_or_default();
	let body_text = String::from_utf8_lossy(body);

	// 4 form fields + 1 file part
	assert_eq!(body_text.matches("Content-Disposition: form-data;").count(), 5);
	assert_eq!(body_text.matches("filename=").count(), 1);
	assert!(body_text.contains("name=\"profileImage\"; filename=\"profileImage.jpg\""));
	assert!(find_subsequence(body, b"fake-jpeg").is_some());

	let content_type = header_value(&web_req.headers, "Content-Type").unwrap_or_default();
	assert!(content_type.starts_with("multipart/form-data; boundary="));

	Ok(())
}

#[test]
fn test_multipart_idempotent_modulo_boundary_ok() -> Result<()> {
	let client = Client::default();
	let req = hangout::CreateHangoutRequest {
		title: "Han river picnic".to_string(),
		meet_time: "2026-09-05T18:00:00Z".to_string(),
		language: "en".to_string(),
		place_name: "Banpo Park".to_string(),
		place_address: None,
		plan: "Bring snacks".to_string(),
		limit_number: 6,
		latitude: 37.51,
		longitude: 126.99,
	};
	let endpoint = hangout::create_hangout(&req, Bytes::from_static(b"img-bytes"))?;

	let first = client.to_web_request(&endpoint)?;
	let second = client.to_web_request(&endpoint)?;

	let first_boundary = boundary_of(&first.headers);
	let second_boundary = boundary_of(&second.headers);
	assert_ne!(first_boundary, second_boundary);

	// Normalize the boundary; everything else must be byte-identical.
	let first_body = String::from_utf8_lossy(first.body.as_deref().unwrap_or_default()).replace(&first_boundary, "B");
	let second_body =
		String::from_utf8_lossy(second.body.as_deref().unwrap_or_default()).replace(&second_boundary, "B");
	assert_eq!(first_body, second_body);
	assert_eq!(first.url, second.url);

	Ok(())
}

// endregion: --- Multipart

// region:    --- Encoding Failures

#[test]
fn test_nested_param_value_err() -> Result<()> {
	#[derive(Serialize)]
	struct NestedReq {
		tags: Vec<String>,
	}

	let client = Client::default();
	let endpoint = EndpointBuilder::new(ServiceBase::Api, "hangouts", HttpMethod::Get)
		.query_params(&NestedReq {
			tags: vec!["a".to_string()],
		})
		.build::<serde_json::Value>()?;

	let res = client.to_web_request(&endpoint);
	assert!(matches!(res, Err(Error::UnsupportedParamValue { ref key, .. }) if key == "tags"));

	Ok(())
}

#[test]
fn test_none_content_type_no_body_ok() -> Result<()> {
	let client = Client::default();
	let endpoint = user::fetch_current_user()?;

	let web_req = client.to_web_request(&endpoint)?;

	assert!(web_req.body.is_none());
	assert!(header_value(&web_req.headers, "Content-Type").is_none());

	Ok(())
}

// endregion: --- Encoding Failures

// region:    --- Support

fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
	headers
		.iter()
		.find(|(n, _)| n.eq_ignore_ascii_case(name))
		.map(|(_, v)| v.as_str())
}

fn boundary_of(headers: &[(String, String)]) -> String {
	header_value(headers, "Content-Type")
		.and_then(|ct| ct.split_once("boundary=").map(|(_, b)| b.to_string()))
		.unwrap_or_default()
}

// endregion: --- Support
