//! Membership tracking for the accumulating tiers.
//!
//! Both trackers hold identities only. Orders live on the window records and
//! are looked up by [`crate::TierPolicy::compute_order`]. Memberships are tens
//! of windows at most, so every operation is a linear scan.

use smallvec::SmallVec;

use crate::WindowId;

/// Ordered stack of stack-tier windows. The last entry is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackTracker {
	entries: Vec<WindowId>,
}

impl StackTracker {
	/// Pushes `id` as the new top, moving it if it was already on the stack.
	pub fn push(&mut self, id: WindowId) {
		self.remove(&id);
		self.entries.push(id);
	}

	/// Removes `id` wherever it sits. Returns whether it was present.
	pub fn remove(&mut self, id: &WindowId) -> bool {
		match self.entries.iter().position(|entry| entry == id) {
			Some(pos) => {
				self.entries.remove(pos);
				true
			}
			None => false,
		}
	}

	/// Returns the current top of the stack.
	pub fn top(&self) -> Option<&WindowId> {
		self.entries.last()
	}

	pub fn contains(&self, id: &WindowId) -> bool {
		self.entries.iter().any(|entry| entry == id)
	}

	/// Iterates from bottom to top.
	pub fn iter(&self) -> impl Iterator<Item = &WindowId> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}
}

/// Unordered set of open overlay-tier windows.
///
/// Draw order comes from each member's own order, never from its position here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayTracker {
	members: SmallVec<[WindowId; 8]>,
}

impl OverlayTracker {
	/// Adds `id` if absent. Returns whether it was added.
	pub fn insert(&mut self, id: WindowId) -> bool {
		if self.contains(&id) {
			return false;
		}
		self.members.push(id);
		true
	}

	/// Removes `id`. Returns whether it was present.
	pub fn remove(&mut self, id: &WindowId) -> bool {
		match self.members.iter().position(|member| member == id) {
			Some(pos) => {
				self.members.swap_remove(pos);
				true
			}
			None => false,
		}
	}

	pub fn contains(&self, id: &WindowId) -> bool {
		self.members.iter().any(|member| member == id)
	}

	pub fn iter(&self) -> impl Iterator<Item = &WindowId> {
		self.members.iter()
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	pub fn clear(&mut self) {
		self.members.clear();
	}
}
