//! Error taxonomy for window operations.
//!
//! Lifecycle operations never fail outward; they log these and report an
//! outcome. Lookups that callers branch on return them directly.

use strata_layering::{ResourceKey, WindowId};
use thiserror::Error;

/// Errors raised by window lookups and sub-window creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
	/// No record exists, or no factory is registered for the identity.
	#[error("window not found: {window}")]
	NotFound {
		/// The requested identity.
		window: WindowId,
	},

	/// The record exists but its content has not been attached yet.
	#[error("window not ready: {window}")]
	NotReady {
		/// The requested identity.
		window: WindowId,
	},

	/// The loader reported no content for the window's resource.
	#[error("failed to load {key} for window {window}")]
	LoadFailure {
		/// The window left waiting for content.
		window: WindowId,
		/// The resource that failed to load.
		key: ResourceKey,
	},

	/// No template is registered under the key.
	#[error("unknown template: {key}")]
	UnknownTemplate {
		/// The requested template key.
		key: ResourceKey,
	},

	/// The host could not instantiate a visual object from the asset.
	#[error("failed to instantiate {key}")]
	InstantiateFailed {
		/// The asset key that could not be instantiated.
		key: ResourceKey,
	},
}

/// Result type for window operations.
pub type Result<T> = std::result::Result<T, WindowError>;
