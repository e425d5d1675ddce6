//! Button record schema.
//!
//! Buttons and templates share one record shape. Every field is
//! optional; a field absent on a button is looked up through its `is`
//! parent at resolution time, so decode never fills defaults in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One button record: the unit property resolution operates over.
///
/// Doubles as a template when stored in the panel's template map;
/// templates are never displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonConfig {
	/// Button caption. Expanded before display.
	pub title: Option<String>,
	/// Layout column the rendering layer places the button in.
	pub column: Option<u32>,
	/// Whether the rendering layer shows response output.
	#[serde(rename = "showOutput")]
	pub show_output: Option<bool>,
	/// Outbound HTTP request description.
	pub request: Option<RequestConfig>,
	/// Remote CLI line for the companion server. Expanded before
	/// dispatch; execution happens elsewhere.
	pub command: Option<String>,
	/// Name of the template to inherit absent fields from.
	pub is: Option<String>,
	/// Substitution variables, by name.
	#[serde(default)]
	pub set: BTreeMap<String, String>,
	/// Substitution values, by position.
	#[serde(default, rename = "setList")]
	pub set_list: Vec<String>,
}

/// An outbound HTTP request description.
///
/// Every string here is an expansion candidate when the dispatch layer
/// materializes the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestConfig {
	/// HTTP method. Dispatch treats an absent method as `GET`.
	pub method: Option<String>,
	/// Target URL.
	pub url: Option<String>,
	/// Header name to header value.
	#[serde(default)]
	pub headers: BTreeMap<String, String>,
	/// Request body text.
	pub body: Option<String>,
}
