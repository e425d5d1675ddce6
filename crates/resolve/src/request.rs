//! Dispatch-side request materialization.

use std::collections::BTreeMap;

use switchboard_schema::ButtonConfig;

use crate::resolver::Resolver;

/// An outbound request with every part resolved and expanded.
///
/// Built immediately before dispatch, so the strings reflect the
/// latest edits to the button's `set` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
	/// HTTP method, `GET` when the configuration names none.
	pub method: String,
	/// Expanded target URL.
	pub url: Option<String>,
	/// Header values, expanded. Header names stay literal.
	pub headers: BTreeMap<String, String>,
	/// Expanded body text.
	pub body: Option<String>,
}

impl Resolver<'_> {
	/// Resolves the effective request and expands every string in it.
	///
	/// Returns `None` when no record on the chain defines a request.
	/// Expansion is seeded with the `request` key, like any other
	/// property lookup.
	pub fn materialize_request(&self, record: &ButtonConfig) -> Option<ResolvedRequest> {
		let request = self.request(record)?;

		let method = match &request.method {
			Some(method) => self.expand_seeded(record, method, "request"),
			None => "GET".to_string(),
		};
		let url = request
			.url
			.as_deref()
			.map(|url| self.expand_seeded(record, url, "request"));
		let headers = request
			.headers
			.iter()
			.map(|(name, value)| (name.clone(), self.expand_seeded(record, value, "request")))
			.collect();
		let body = request
			.body
			.as_deref()
			.map(|body| self.expand_seeded(record, body, "request"));

		Some(ResolvedRequest {
			method,
			url,
			headers,
			body,
		})
	}
}

#[cfg(test)]
mod tests {
	use switchboard_schema::{Defaults, PanelConfig, RequestConfig};

	use super::*;

	fn parse_panel(input: &str) -> PanelConfig {
		PanelConfig::parse(input).unwrap()
	}

	#[test]
	fn test_materialize_defaults_method_to_get() {
		let panel = parse_panel(r#"{"buttons": [{"request": {"url": "http://host/"}}]}"#);
		let defaults = Defaults::new();
		let resolver = Resolver::new(&panel.templates, &defaults);

		let request = resolver.materialize_request(&panel.buttons[0]).unwrap();
		assert_eq!(request.method, "GET");
		assert_eq!(request.url.as_deref(), Some("http://host/"));
	}

	#[test]
	fn test_materialize_expands_all_parts() {
		let panel = parse_panel(
			r#"{
				"buttons": [{
					"set": {"host": "box", "token": "t-1", "payload": "on"},
					"request": {
						"method": "${verb}",
						"url": "http://${host}/power",
						"headers": {"authorization": "Bearer ${token}"},
						"body": "{\"state\": \"${payload}\"}"
					}
				}]
			}"#,
		);
		let defaults = Defaults::from_iter([("verb", "POST")]);
		let resolver = Resolver::new(&panel.templates, &defaults);

		let request = resolver.materialize_request(&panel.buttons[0]).unwrap();
		assert_eq!(request.method, "POST");
		assert_eq!(request.url.as_deref(), Some("http://box/power"));
		assert_eq!(
			request.headers.get("authorization").map(String::as_str),
			Some("Bearer t-1"),
		);
		assert_eq!(request.body.as_deref(), Some("{\"state\": \"on\"}"));
	}

	#[test]
	fn test_materialize_none_without_request() {
		let panel = parse_panel(r#"{"buttons": [{"title": "bare"}]}"#);
		let defaults = Defaults::new();
		let resolver = Resolver::new(&panel.templates, &defaults);

		assert_eq!(resolver.materialize_request(&panel.buttons[0]), None);
	}

	#[test]
	fn test_materialize_inherits_request_record() {
		let panel = parse_panel(
			r#"{
				"templates": {
					"Fetch": {"request": {"method": "GET", "url": "http://${ip}/"}}
				},
				"buttons": [{"is": "Fetch", "set": {"ip": "10.0.0.9"}}]
			}"#,
		);
		let defaults = Defaults::new();
		let resolver = Resolver::new(&panel.templates, &defaults);

		let request = resolver.materialize_request(&panel.buttons[0]).unwrap();
		assert_eq!(request.url.as_deref(), Some("http://10.0.0.9/"));
	}

	#[test]
	fn test_raw_request_is_unexpanded() {
		let panel = parse_panel(
			r#"{"buttons": [{"set": {"ip": "x"}, "request": {"url": "http://${ip}/"}}]}"#,
		);
		let defaults = Defaults::new();
		let resolver = Resolver::new(&panel.templates, &defaults);

		let raw = resolver.request(&panel.buttons[0]).unwrap();
		assert_eq!(
			raw,
			RequestConfig {
				url: Some("http://${ip}/".to_string()),
				..Default::default()
			}
		);
	}
}
