//! Shared templates and the sub-windows instantiated from them.

use strata_layering::{ResourceKey, WindowId};

use super::WindowRegistry;
use crate::behavior::{AttachContext, WindowBehavior};
use crate::error::{Result, WindowError};
use crate::host::{Asset, Host, NodeId};
use crate::record::SubWindow;

impl<H: Host> WindowRegistry<H> {
	/// Registers preloaded content that sub-windows can be created from.
	///
	/// The first registration of a key wins. A rejected asset is dropped and the
	/// caller keeps its reference to `key`.
	pub fn add_template(&mut self, key: impl Into<ResourceKey>, asset: Asset) -> bool {
		let key = key.into();
		match self.templates.insert(key.clone(), asset) {
			Ok(()) => {
				tracing::trace!(%key, "Template registered");
				true
			}
			Err(_) => {
				tracing::warn!(%key, "Template already registered; keeping the first");
				false
			}
		}
	}

	pub fn has_template(&self, key: &ResourceKey) -> bool {
		self.templates.get(key).is_some()
	}

	/// Instantiates template `key` inside `owner` and ties its lifetime to it.
	///
	/// The sub-window is parented under the owner's content when attached, or
	/// its placeholder otherwise.
	pub fn create_sub_window(
		&mut self,
		owner: impl Into<WindowId>,
		key: impl Into<ResourceKey>,
		mut behavior: Box<dyn WindowBehavior>,
	) -> Result<NodeId> {
		let owner = owner.into();
		let key = key.into();
		let Some(record) = self.records.get_mut(&owner) else {
			return Err(WindowError::NotFound { window: owner });
		};
		let Some(asset) = self.templates.get(&key) else {
			let err = WindowError::UnknownTemplate { key };
			tracing::error!(window = %owner, error = %err, "Cannot create sub-window");
			return Err(err);
		};

		let parent = record.content().unwrap_or(record.placeholder);
		let Some(node) = self.host.instantiate(parent, asset) else {
			let err = WindowError::InstantiateFailed { key };
			tracing::error!(window = %owner, error = %err, "Cannot create sub-window");
			return Err(err);
		};

		behavior.on_content_attached(AttachContext {
			window: &owner,
			content: node,
		});
		tracing::trace!(window = %owner, %key, ?node, "Sub-window created");
		record.sub_windows.push(SubWindow { key, node, behavior });
		Ok(node)
	}

	/// Forgets every template and releases each key once.
	pub fn clear_templates(&mut self) -> usize {
		let keys = self.templates.drain_keys();
		for key in &keys {
			self.host.release(key);
		}
		tracing::debug!(count = keys.len(), "Templates cleared");
		keys.len()
	}
}
