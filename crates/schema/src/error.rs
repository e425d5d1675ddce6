//! Error and warning types for panel configuration loading.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a panel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error decoding panel JSON.
	#[error("JSON decode error: {0}")]
	Json(#[from] serde_json::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// A non-fatal finding from [`PanelConfig::validate`](crate::PanelConfig::validate).
///
/// Dangling references and inheritance cycles are tolerated at
/// resolution time, so they warn instead of failing the load. Callers
/// should display these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// An `is` reference names no template.
	UnknownTemplate {
		/// The referring record: a template name or a `buttons[i]` position.
		source: String,
		/// The referenced name missing from the template map.
		name: String,
	},
	/// Following `is` from a template leads back to a template already
	/// on the chain.
	InheritanceCycle {
		/// The template whose chain loops.
		source: String,
	},
}

impl fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnknownTemplate { source, name } => {
				write!(f, "{source}: 'is' references unknown template '{name}'")
			}
			Self::InheritanceCycle { source } => {
				write!(f, "{source}: 'is' chain loops back on itself")
			}
		}
	}
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
