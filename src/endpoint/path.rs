use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Matches the conservative path-segment set: everything a segment separator or
// URL metacharacter could be taken for gets escaped.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'#')
	.add(b'<')
	.add(b'>')
	.add(b'?')
	.add(b'`')
	.add(b'{')
	.add(b'}')
	.add(b'/')
	.add(b'%')
	.add(b'\\');

/// Percent-encodes one path segment, so user-controlled identifiers can be
/// embedded in an endpoint path without altering its segment structure.
#[must_use]
pub fn encode_path_segment(segment: &str) -> String {
	utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
