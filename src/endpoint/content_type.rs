/// The wire format used for the request body.
///
/// Query params are orthogonal: they always go to the URL query string,
/// whatever the content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
	/// No request body.
	#[default]
	None,
	/// Body params as one `application/x-www-form-urlencoded` string.
	UrlEncoded,
	/// Body params as discrete `multipart/form-data` fields, binary parts as file parts.
	/// The only content type under which binary parts are legal.
	Multipart,
}
