//! Panel configuration schema for Switchboard.
//!
//! This crate is the validating boundary for button panels. A panel
//! JSON document decodes into typed records (unknown fields rejected),
//! an optional structural lint reports template-graph problems without
//! failing the load, and [`Defaults`] carries the process-wide fallback
//! values consulted by `set`/`setList` resolution.
//!
//! Past a successful [`PanelConfig::parse`] the resolution core trusts
//! these shapes and never re-validates.

pub mod button;
pub mod defaults;
pub mod error;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

pub use button::{ButtonConfig, RequestConfig};
pub use defaults::{Defaults, ENV_PREFIX};
pub use error::{ConfigError, ConfigWarning, Result};

use serde::{Deserialize, Serialize};

/// A complete panel: the template map plus the displayed buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
	/// Named inheritance sources, referenced by `is`. Never displayed.
	#[serde(default)]
	pub templates: BTreeMap<String, ButtonConfig>,
	/// Buttons in display order.
	#[serde(default)]
	pub buttons: Vec<ButtonConfig>,
}

impl PanelConfig {
	/// Parse a JSON string into a [`PanelConfig`].
	///
	/// Unknown fields anywhere in the document fail the decode; the
	/// resolution core relies on its inputs having passed this boundary.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}

	/// Load a panel configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Structural lint over the template graph.
	///
	/// Reports `is` references that name no template and inheritance
	/// chains that loop. Resolution tolerates both at runtime (the
	/// lookup comes back empty), so these warn rather than fail.
	pub fn validate(&self) -> Vec<ConfigWarning> {
		let mut warnings = Vec::new();

		for (name, template) in &self.templates {
			self.check_parent(name, template, &mut warnings);
		}
		for (i, button) in self.buttons.iter().enumerate() {
			let source = match &button.title {
				Some(title) => title.clone(),
				None => format!("buttons[{i}]"),
			};
			self.check_parent(&source, button, &mut warnings);
		}

		for name in self.templates.keys() {
			if self.chain_loops(name) {
				warnings.push(ConfigWarning::InheritanceCycle {
					source: name.clone(),
				});
			}
		}

		for warning in &warnings {
			tracing::warn!(%warning, "panel configuration lint");
		}
		warnings
	}

	fn check_parent(
		&self,
		source: &str,
		record: &ButtonConfig,
		warnings: &mut Vec<ConfigWarning>,
	) {
		if let Some(parent) = &record.is
			&& !self.templates.contains_key(parent)
		{
			warnings.push(ConfigWarning::UnknownTemplate {
				source: source.to_string(),
				name: parent.clone(),
			});
		}
	}

	/// Whether following `is` from `start` revisits a template.
	fn chain_loops(&self, start: &str) -> bool {
		let mut seen = BTreeSet::new();
		let mut current = start;
		while let Some(template) = self.templates.get(current) {
			if !seen.insert(current) {
				return true;
			}
			match &template.is {
				Some(parent) => current = parent,
				None => return false,
			}
		}
		false
	}
}
