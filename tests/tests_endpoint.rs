mod support;

use bytes::Bytes;
use mingle::api::{hangout, user};
use mingle::endpoint::{BinaryPart, ContentType, EndpointBuilder, HttpMethod, ServiceBase, encode_path_segment};
use mingle::Error;
type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

// region:    --- Catalog

#[test]
fn test_like_hangout_paths_ok() -> Result<()> {
	let liked = hangout::like_hangout("h-42", true)?;
	let unliked = hangout::like_hangout("h-42", false)?;

	assert_eq!(liked.path(), "hangout/like/h-42");
	assert_eq!(unliked.path(), "hangout/nolike/h-42");
	assert_eq!(liked.method(), HttpMethod::Get);

	Ok(())
}

#[test]
fn test_delete_hangout_id_encoded_ok() -> Result<()> {
	let endpoint = hangout::delete_hangout("a/b c")?;

	// The identifier must not introduce new path segments.
	assert_eq!(endpoint.path(), "hangout/a%2Fb%20c");
	assert_eq!(endpoint.method(), HttpMethod::Delete);

	Ok(())
}

#[test]
fn test_create_user_is_multipart_ok() -> Result<()> {
	let req = user::CreateUserRequest {
		name: "Nari".to_string(),
		gender: "female".to_string(),
		birth: "1998-04-02".to_string(),
		nationality: "KR".to_string(),
	};
	let endpoint = user::create_user(&req, Some(Bytes::from_static(b"fake-jpeg")))?;

	assert_eq!(endpoint.content_type(), ContentType::Multipart);
	assert_eq!(endpoint.binary_parts().len(), 1);
	assert_eq!(endpoint.binary_parts()[0].name(), "profileImage");

	Ok(())
}

// endregion: --- Catalog

// region:    --- Construction Contract

#[test]
fn test_binary_parts_require_multipart_err() {
	let res = EndpointBuilder::new(ServiceBase::Api, "user", HttpMethod::Post)
		.binary_part(BinaryPart::jpeg("profileImage", Bytes::from_static(b"img")))
		.content_type(ContentType::UrlEncoded)
		.build::<serde_json::Value>();

	assert!(matches!(res, Err(Error::BinaryPartsRequireMultipart { .. })));
}

#[test]
fn test_params_not_an_object_err() {
	let res = EndpointBuilder::new(ServiceBase::Api, "hangouts", HttpMethod::Get)
		.query_params(&"just-a-string")
		.build::<serde_json::Value>();

	assert!(matches!(res, Err(Error::ParamsNotAnObject { .. })));
}

#[test]
fn test_encode_path_segment_ok() {
	assert_eq!(encode_path_segment("plain-id-42"), "plain-id-42");
	assert_eq!(encode_path_segment("../etc"), "..%2Fetc");
	assert_eq!(encode_path_segment("50%"), "50%25");
}

#[test]
fn test_endpoint_clone_reusable_ok() -> Result<()> {
	let endpoint = hangout::like_hangout("h-7", true)?;
	let cloned = endpoint.clone();

	assert_eq!(endpoint.path(), cloned.path());
	assert_eq!(endpoint.method(), cloned.method());

	Ok(())
}

// endregion: --- Construction Contract
