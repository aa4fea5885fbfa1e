//! Registry configuration.
//!
//! ```toml
//! margin = 100
//! refresh-event = "refresh"
//!
//! [tier-bases]
//! base = 1
//! stack = 2000
//! overlay = 4000
//! mask = 6000
//! top = 8000
//! ```
//!
//! Every key is optional; omitted keys keep their defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use strata_layering::{DEFAULT_MARGIN, Order, PolicyError, TierBases, TierPolicy};
use thiserror::Error;

/// Default notifier event used to deliver refresh payloads.
pub const DEFAULT_REFRESH_EVENT: &str = "refresh";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Tier bases or margin are inconsistent.
	#[error("invalid layering: {0}")]
	Policy(#[from] PolicyError),
}

/// Layering and delivery settings for a [`crate::WindowRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LayerConfig {
	/// Base order of every tier.
	pub tier_bases: TierBases,
	/// Increment between accumulated peers in the stack and overlay tiers.
	pub margin: Order,
	/// Event name handed to the notifier with refresh payloads.
	pub refresh_event: String,
}

impl Default for LayerConfig {
	fn default() -> Self {
		Self {
			tier_bases: TierBases::default(),
			margin: DEFAULT_MARGIN,
			refresh_event: DEFAULT_REFRESH_EVENT.to_string(),
		}
	}
}

impl LayerConfig {
	/// Parses and validates configuration from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(text)?;
		config.policy()?;
		Ok(config)
	}

	/// Reads, parses, and validates a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}

	/// Builds the ordering policy described by this configuration.
	pub fn policy(&self) -> Result<TierPolicy, PolicyError> {
		TierPolicy::new(self.tier_bases, self.margin)
	}
}
