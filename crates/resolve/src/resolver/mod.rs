//! Chain-walking property and variable resolution.
//!
//! The [`Resolver`] answers "what is the effective value of X on this
//! button" by walking the button's `is` chain through the template map:
//! first definition wins. `set`/`setList` lookups consult the fallback
//! map once the chain is exhausted. String results are handed to the
//! expander before they are returned, so callers only ever see final
//! text.
//!
//! # Lookup order
//!
//! 1. The record's own field (or `set`/`setList` entry)
//! 2. The `is` parent, transitively, nearest first
//! 3. For `set`/`setList` lookups only: the fallback map
//! 4. Absent
//!
//! The data format cannot rule out `is` cycles, so chain traversal is
//! bounded by [`MAX_INHERIT_DEPTH`] instead of trusted to terminate.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use switchboard_schema::{ButtonConfig, Defaults, RequestConfig};

use crate::expander;


/// Longest `is` chain a lookup follows before giving up.
pub const MAX_INHERIT_DEPTH: usize = 32;

/// Read-only lookup context: the template map plus the fallback map.
///
/// The resolver holds shared borrows only and never mutates either
/// structure, so it can be created per lookup or shared freely across
/// a render pass.
///
/// # Example
///
/// ```
/// use switchboard_resolve::Resolver;
/// use switchboard_schema::{Defaults, PanelConfig};
///
/// let panel = PanelConfig::parse(
///     r#"{
///         "templates": {"Host": {"set": {"ip": "192.168.1.64"}}},
///         "buttons": [{"title": "Ping ${ip}", "is": "Host"}]
///     }"#,
/// )
/// .unwrap();
/// let defaults = Defaults::new();
///
/// let resolver = Resolver::new(&panel.templates, &defaults);
/// assert_eq!(
///     resolver.title(&panel.buttons[0]).as_deref(),
///     Some("Ping 192.168.1.64"),
/// );
/// ```
pub struct Resolver<'a> {
	templates: &'a BTreeMap<String, ButtonConfig>,
	defaults: &'a Defaults,
}

impl<'a> Resolver<'a> {
	/// Creates a resolver over a template map and a fallback map.
	pub fn new(templates: &'a BTreeMap<String, ButtonConfig>, defaults: &'a Defaults) -> Self {
		Self {
			templates,
			defaults,
		}
	}

	/// Effective button caption, expanded.
	pub fn title(&self, record: &ButtonConfig) -> Option<String> {
		self.walk(record, "title", |r| r.title.clone())
			.map(|title| self.expand_seeded(record, &title, "title"))
	}

	/// Effective layout column.
	pub fn column(&self, record: &ButtonConfig) -> Option<u32> {
		self.walk(record, "column", |r| r.column)
	}

	/// Effective output-visibility flag.
	///
	/// An explicit `false` on the record is a definition and does not
	/// fall through to the parent.
	pub fn show_output(&self, record: &ButtonConfig) -> Option<bool> {
		self.walk(record, "showOutput", |r| r.show_output)
	}

	/// Effective request record, untouched by expansion.
	///
	/// Nested records are opaque to property resolution. Use
	/// [`Resolver::materialize_request`] for dispatch-ready strings.
	pub fn request(&self, record: &ButtonConfig) -> Option<RequestConfig> {
		self.walk(record, "request", |r| r.request.clone())
	}

	/// Effective command line, expanded.
	pub fn command(&self, record: &ButtonConfig) -> Option<String> {
		self.walk(record, "command", |r| r.command.clone())
			.map(|command| self.expand_seeded(record, &command, "command"))
	}

	/// Named substitution variable, expanded.
	///
	/// Expansion is seeded with `key` itself, so a value that embeds
	/// its own key keeps that token verbatim.
	pub fn set_value(&self, record: &ButtonConfig, key: &str) -> Option<String> {
		self.set_raw(record, key)
			.map(|value| self.expand_seeded(record, &value, key))
	}

	/// Positional substitution variable, expanded.
	///
	/// The fallback map is consulted under the stringified index.
	pub fn set_item(&self, record: &ButtonConfig, index: usize) -> Option<String> {
		let key = index.to_string();
		self.list_raw(record, index, &key)
			.map(|value| self.expand_seeded(record, &value, &key))
	}

	/// Expands every token in `text` against `record`'s chain.
	///
	/// Total: unresolved, cyclic, or malformed tokens stay visible in
	/// the output instead of failing the call.
	pub fn expand(&self, record: &ButtonConfig, text: &str) -> String {
		let mut visited = FxHashSet::default();
		expander::substitute(self, record, text, &mut visited)
	}

	/// Raw token lookup for the expander. Pure-digit keys address
	/// `setList`, everything else `set`. No expansion happens here;
	/// the expander owns that recursion.
	pub(crate) fn token_raw(&self, record: &ButtonConfig, key: &str) -> Option<String> {
		match key.parse::<usize>() {
			Ok(index) => self.list_raw(record, index, key),
			Err(_) => self.set_raw(record, key),
		}
	}

	pub(crate) fn expand_seeded(&self, record: &ButtonConfig, text: &str, seed: &str) -> String {
		let mut visited = FxHashSet::default();
		visited.insert(seed.to_string());
		expander::substitute(self, record, text, &mut visited)
	}

	fn set_raw(&self, record: &ButtonConfig, key: &str) -> Option<String> {
		self.walk(record, key, |r| r.set.get(key).cloned())
			.or_else(|| self.defaults.get(key).map(str::to_string))
	}

	fn list_raw(&self, record: &ButtonConfig, index: usize, fallback_key: &str) -> Option<String> {
		self.walk(record, fallback_key, |r| r.set_list.get(index).cloned())
			.or_else(|| self.defaults.get(fallback_key).map(str::to_string))
	}

	/// Walks the `is` chain from `record`, returning the first value
	/// `get` yields. `what` names the lookup for diagnostics.
	fn walk<T>(
		&self,
		record: &ButtonConfig,
		what: &str,
		get: impl Fn(&ButtonConfig) -> Option<T>,
	) -> Option<T> {
		let mut current = record;
		for _ in 0..MAX_INHERIT_DEPTH {
			if let Some(value) = get(current) {
				return Some(value);
			}
			let Some(parent) = &current.is else {
				return None;
			};
			match self.templates.get(parent) {
				Some(next) => current = next,
				None => {
					tracing::debug!(what, parent = %parent, "is reference names no template");
					return None;
				}
			}
		}
		tracing::warn!(
			what,
			limit = MAX_INHERIT_DEPTH,
			"inheritance chain cut off; is references may form a cycle",
		);
		None
	}
}
