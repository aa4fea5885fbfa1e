use rustc_hash::FxHashMap;
use strata_layering::ResourceKey;

use crate::host::Asset;

/// Preloaded assets that sub-windows are instantiated from.
#[derive(Default)]
pub(crate) struct TemplateStore {
	inner: FxHashMap<ResourceKey, Asset>,
}

impl TemplateStore {
	/// Stores `asset` under `key` unless a template is already registered there.
	///
	/// Returns the asset back when the key was taken.
	pub(crate) fn insert(&mut self, key: ResourceKey, asset: Asset) -> Result<(), Asset> {
		if self.inner.contains_key(&key) {
			return Err(asset);
		}
		self.inner.insert(key, asset);
		Ok(())
	}

	pub(crate) fn get(&self, key: &ResourceKey) -> Option<&Asset> {
		self.inner.get(key)
	}

	pub(crate) fn len(&self) -> usize {
		self.inner.len()
	}

	/// Forgets every template, returning their keys.
	pub(crate) fn drain_keys(&mut self) -> Vec<ResourceKey> {
		self.inner.drain().map(|(key, _)| key).collect()
	}
}
