//! Named transforms applied to resolved token values.

/// A transform named in a `${transform:key}` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
	/// Percent-encodes the value for embedding in a URL.
	UrlEncode,
	/// Renders the value as a JSON string literal, quotes included.
	JsonString,
}

impl Transform {
	/// Looks up a transform by its wire name. Names are case
	/// sensitive; unknown names return `None` and the caller
	/// substitutes the value untransformed.
	pub fn parse(name: &str) -> Option<Self> {
		match name {
			"urlencode" => Some(Self::UrlEncode),
			"jsonString" => Some(Self::JsonString),
			_ => None,
		}
	}

	/// Applies the transform to a resolved value.
	pub fn apply(&self, value: &str) -> String {
		match self {
			Self::UrlEncode => urlencoding::encode(value).into_owned(),
			// String serialization cannot fail; the fallback keeps this
			// total anyway.
			Self::JsonString => {
				serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
			}
		}
	}
}
