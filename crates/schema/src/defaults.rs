//! Process-wide fallback values for substitution lookups.

use std::collections::BTreeMap;

/// Environment prefix for seeding fallback values.
///
/// `SWITCHBOARD_SET_ip=10.0.0.1` provides the fallback `ip`. The part
/// after the prefix is the key verbatim, case included.
pub const ENV_PREFIX: &str = "SWITCHBOARD_SET_";

/// The last tier of `set`/`setList` lookup, consulted once a button's
/// whole inheritance chain is exhausted.
///
/// Built once at configuration-load time. The resolution core only ever
/// reads it; reconfiguration swaps the value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
	values: BTreeMap<String, String>,
}

impl Defaults {
	/// An empty fallback map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Seeds the map from `SWITCHBOARD_SET_*` environment variables.
	///
	/// The only environment read in the crate; resolution itself never
	/// touches the environment.
	pub fn from_env() -> Self {
		Self::from_prefixed(std::env::vars())
	}

	fn from_prefixed(vars: impl Iterator<Item = (String, String)>) -> Self {
		let values = vars
			.filter_map(|(name, value)| {
				name.strip_prefix(ENV_PREFIX)
					.map(|key| (key.to_string(), value))
			})
			.collect();
		Self { values }
	}

	/// Looks up a fallback value.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.values.get(key).map(String::as_str)
	}

	/// True when no fallback values are configured.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Defaults {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}
