//! Factory table mapping window identities to their behaviors and content.

use rustc_hash::FxHashMap;
use strata_layering::{ResourceKey, WindowId};

use crate::behavior::WindowBehavior;

/// Produces a fresh behavior each time a window record is created.
pub type WindowFactory = Box<dyn Fn() -> Box<dyn WindowBehavior>>;

struct CatalogEntry {
	key: ResourceKey,
	factory: WindowFactory,
}

/// Windows known to a registry, registered explicitly at startup.
#[derive(Default)]
pub struct WindowCatalog {
	entries: FxHashMap<WindowId, CatalogEntry>,
}

impl std::fmt::Debug for WindowCatalog {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut ids: Vec<&str> = self.entries.keys().map(WindowId::as_str).collect();
		ids.sort_unstable();
		f.debug_struct("WindowCatalog").field("windows", &ids).finish()
	}
}

impl WindowCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a window whose content key equals its identity.
	///
	/// Re-registering an identity replaces the previous entry.
	pub fn register<F>(&mut self, window: impl Into<WindowId>, factory: F) -> &mut Self
	where
		F: Fn() -> Box<dyn WindowBehavior> + 'static,
	{
		let window = window.into();
		let key = ResourceKey::from(&window);
		self.register_with_key(window, key, factory)
	}

	/// Registers a window that loads its content from `key`.
	pub fn register_with_key<F>(&mut self, window: impl Into<WindowId>, key: impl Into<ResourceKey>, factory: F) -> &mut Self
	where
		F: Fn() -> Box<dyn WindowBehavior> + 'static,
	{
		self.entries.insert(
			window.into(),
			CatalogEntry {
				key: key.into(),
				factory: Box::new(factory),
			},
		);
		self
	}

	pub fn contains(&self, window: &WindowId) -> bool {
		self.entries.contains_key(window)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the content key and a new behavior for `window`.
	pub(crate) fn instantiate(&self, window: &WindowId) -> Option<(ResourceKey, Box<dyn WindowBehavior>)> {
		let entry = self.entries.get(window)?;
		Some((entry.key.clone(), (entry.factory)()))
	}
}
