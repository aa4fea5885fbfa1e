use strata_layering::{Tier, WindowId};

use super::WindowRegistry;
use crate::error::WindowError;
use crate::host::{Host, Payload};
use crate::record::WindowRecord;

/// Result of [`WindowRegistry::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
	/// A new placeholder was created and its content load started.
	Created,
	/// An existing record was reactivated.
	Reused,
	/// The identity is not registered; nothing changed.
	NotFound,
}

/// Result of [`WindowRegistry::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
	Closed,
	/// No record exists, or it is not active.
	NotOpen,
}

/// Result of [`WindowRegistry::refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
	/// The window was visible and received the payload.
	Delivered,
	/// The payload was buffered, replacing any earlier buffered one.
	Deferred,
	Missing,
}

/// Result of [`WindowRegistry::open_or_refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOrRefresh {
	Opened(OpenOutcome),
	Refreshed(RefreshOutcome),
}

impl<H: Host> WindowRegistry<H> {
	/// Shows `window` in `tier`, creating it on first use.
	///
	/// Equivalent to [`Self::open_with`] with `destroy_on_switch` set.
	pub fn open(&mut self, window: impl Into<WindowId>, tier: Tier) -> OpenOutcome {
		self.open_with(window, tier, true)
	}

	/// Shows `window` in `tier`.
	///
	/// [`Tier::None`] keeps the record's existing tier. Opening into the stack
	/// tears down the previous stack top; opening into the overlay tier places
	/// the window above every open overlay.
	pub fn open_with(&mut self, window: impl Into<WindowId>, tier: Tier, destroy_on_switch: bool) -> OpenOutcome {
		let id = window.into();
		let outcome = if let Some(record) = self.records.get_mut(&id) {
			record.order = self.policy.recover_order(record.tier);
			OpenOutcome::Reused
		} else if self.create(&id) {
			OpenOutcome::Created
		} else {
			return OpenOutcome::NotFound;
		};

		self.stack.remove(&id);
		self.overlays.remove(&id);

		let Some(record) = self.records.get_mut(&id) else {
			return OpenOutcome::NotFound;
		};
		if tier != Tier::None {
			record.tier = tier;
		}
		record.destroy_on_switch = destroy_on_switch;
		let tier = record.tier;

		// Replaced top leaves before ordering so switches do not climb the tier.
		let replaced = match tier {
			Tier::Stack => self.stack.top().filter(|top| **top != id).cloned(),
			_ => None,
		};
		if let Some(replaced) = replaced {
			tracing::debug!(window = %id, replaced = %replaced, "Stack top replaced");
			self.teardown(&replaced);
		}

		let records = &self.records;
		let order = self
			.policy
			.compute_order(tier, &self.stack, &self.overlays, |peer| records.get(peer).map(WindowRecord::order));

		match tier {
			Tier::Overlay => {
				self.overlays.insert(id.clone());
			}
			Tier::Stack => self.stack.push(id.clone()),
			_ => {}
		}

		if let Some(record) = self.records.get_mut(&id) {
			record.order = order;
			record.active = true;
			self.host.set_order(record.placeholder, order);
			self.host.set_visible(record.placeholder, record.is_loaded());
		}
		tracing::debug!(window = %id, ?tier, order, ?outcome, "Window opened");

		self.flush_pending(&id);
		outcome
	}

	fn create(&mut self, id: &WindowId) -> bool {
		let Some((key, behavior)) = self.catalog.instantiate(id) else {
			let err = WindowError::NotFound { window: id.clone() };
			tracing::error!(window = %id, error = %err, "Cannot open unregistered window");
			return false;
		};
		let placeholder = self.host.spawn_placeholder(id);
		let order = self.policy.recover_order(Tier::None);
		self.records
			.insert(id.clone(), WindowRecord::placeholder(id.clone(), key, behavior, placeholder, order));
		tracing::debug!(window = %id, "Placeholder created");
		self.begin_load(id);
		true
	}

	/// Hides and tears down `window`.
	///
	/// Closing the stack top reopens whatever is beneath it. Listeners
	/// registered with [`Self::on_close`] run after teardown.
	pub fn close(&mut self, window: impl Into<WindowId>) -> CloseOutcome {
		let id = window.into();
		let Some(record) = self.records.get(&id) else {
			tracing::trace!(window = %id, "Close of unknown window ignored");
			return CloseOutcome::NotOpen;
		};
		if !record.active {
			return CloseOutcome::NotOpen;
		}
		let tier = record.tier;

		let resume = match tier {
			Tier::Stack => {
				self.stack.remove(&id);
				self.stack.top().cloned()
			}
			Tier::Overlay => {
				self.overlays.remove(&id);
				None
			}
			_ => None,
		};

		if let Some(record) = self.records.get_mut(&id) {
			record.order = self.policy.recover_order(tier);
			record.active = false;
			self.host.set_visible(record.placeholder, false);
		}
		self.teardown(&id);
		tracing::debug!(window = %id, ?tier, "Window closed");

		if let Some(next) = resume {
			let destroy_on_switch = self.records.get(&next).is_none_or(WindowRecord::destroy_on_switch);
			self.open_with(next, Tier::Stack, destroy_on_switch);
		}

		for listener in &mut self.close_listeners {
			listener(&id);
		}
		CloseOutcome::Closed
	}

	/// Tears down every active window marked `destroy_on_switch`.
	///
	/// Returns how many windows were swept. Survivors keep their tier membership.
	pub fn close_all(&mut self) -> usize {
		let swept: Vec<WindowId> = self
			.records
			.values()
			.filter(|record| record.active && record.destroy_on_switch)
			.map(|record| record.id.clone())
			.collect();
		for id in &swept {
			if let Some(record) = self.records.get_mut(id) {
				record.active = false;
				self.host.set_visible(record.placeholder, false);
			}
			self.teardown(id);
		}
		tracing::debug!(count = swept.len(), "Context switch swept windows");
		swept.len()
	}

	/// Tears down every window outside `keep` and forgets the stack.
	pub fn remove_all_except(&mut self, keep: Tier) -> usize {
		self.stack.clear();
		let doomed: Vec<WindowId> = self
			.records
			.values()
			.filter(|record| record.tier != keep)
			.map(|record| record.id.clone())
			.collect();
		for id in &doomed {
			self.teardown(id);
		}
		tracing::debug!(?keep, count = doomed.len(), "Removed windows outside tier");
		doomed.len()
	}

	/// Tears down `window` without running close listeners or reopening the stack.
	pub fn remove(&mut self, window: impl Into<WindowId>) -> bool {
		self.teardown(&window.into())
	}

	/// Tears down every window.
	pub fn remove_all(&mut self) -> usize {
		self.stack.clear();
		self.overlays.clear();
		let all: Vec<WindowId> = self.records.keys().cloned().collect();
		for id in &all {
			self.teardown(id);
		}
		all.len()
	}

	/// Opens `window` with `payload` buffered if it does not exist yet,
	/// otherwise refreshes it in place.
	pub fn open_or_refresh(&mut self, window: impl Into<WindowId>, tier: Tier, payload: Payload) -> OpenOrRefresh {
		let id = window.into();
		if self.records.contains_key(&id) {
			return OpenOrRefresh::Refreshed(self.refresh(id, payload));
		}
		let outcome = self.open(id.clone(), tier);
		if outcome != OpenOutcome::NotFound {
			self.refresh(id, payload);
		}
		OpenOrRefresh::Opened(outcome)
	}

	/// Opens `window` in `tier` unless it is already active, then refreshes it.
	///
	/// Used for prompts and popups that are shown with fresh data every time.
	pub fn present(&mut self, window: impl Into<WindowId>, tier: Tier, payload: Payload) -> RefreshOutcome {
		let id = window.into();
		if !self.is_active(id.as_str()) && self.open(id.clone(), tier) == OpenOutcome::NotFound {
			return RefreshOutcome::Missing;
		}
		self.refresh(id, payload)
	}

	/// Removes `id` and releases everything it owns.
	pub(super) fn teardown(&mut self, id: &WindowId) -> bool {
		let Some(mut record) = self.records.shift_remove(id) else {
			return false;
		};
		self.stack.remove(id);
		self.overlays.remove(id);

		for mut sub in record.sub_windows.drain(..) {
			sub.behavior.on_release();
			self.host.destroy(sub.node);
		}
		let loaded = record.is_loaded();
		if loaded {
			record.behavior.on_release();
			self.host.release(&record.resource_key);
		}
		self.host.destroy(record.placeholder);
		tracing::debug!(window = %id, tier = ?record.tier, loaded, "Window torn down");
		true
	}
}
