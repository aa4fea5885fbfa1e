use crate::{Order, Tier, WindowId};

/// One window's position in a draw snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawEntry {
	pub window: WindowId,
	pub tier: Tier,
	pub order: Order,
	/// Whether the window is active and its content is attached.
	pub visible: bool,
}

/// Windows sorted bottom to top.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
	entries: Vec<DrawEntry>,
}

impl DrawList {
	/// Builds a sorted list from unsorted entries.
	pub fn from_entries(entries: impl IntoIterator<Item = DrawEntry>) -> Self {
		let mut list = Self {
			entries: entries.into_iter().collect(),
		};
		list.sort_stable();
		list
	}

	/// Sorts by order; ties keep insertion order.
	pub fn sort_stable(&mut self) {
		self.entries.sort_by_key(|entry| entry.order);
	}

	pub fn entries(&self) -> &[DrawEntry] {
		&self.entries
	}

	/// Returns the highest visible window in the stack or overlay tiers.
	pub fn top_most(&self) -> Option<&DrawEntry> {
		self.entries
			.iter()
			.rev()
			.find(|entry| entry.visible && entry.tier.accumulates())
	}
}
