//! Content loading, completion application, and refresh delivery.
//!
//! Each record issues at most one load. The ticket stored in
//! [`AttachState::Loading`] is compared against every completion; anything
//! that does not match a live loading record is an orphan and has its
//! reference released immediately.

use strata_layering::WindowId;

use super::{RefreshOutcome, WindowRegistry};
use crate::behavior::AttachContext;
use crate::error::WindowError;
use crate::host::{Completion, Host, LoadCompleter, Notifier, Payload};
use crate::record::{AttachState, WindowRecord};

impl<H: Host> WindowRegistry<H> {
	/// Requests content for a record still in [`AttachState::Placeholder`].
	pub(super) fn begin_load(&mut self, id: &WindowId) {
		let Some(record) = self.records.get_mut(id) else {
			return;
		};
		if record.attach != AttachState::Placeholder {
			return;
		}
		self.last_ticket = self.last_ticket.next();
		let ticket = self.last_ticket;
		record.attach = AttachState::Loading(ticket);
		let key = record.resource_key.clone();

		let completer = LoadCompleter::new(id.clone(), key.clone(), ticket, self.completion_tx.clone());
		tracing::trace!(window = %id, %key, ?ticket, "Content load requested");
		self.host.load(&key, completer);
	}

	/// Applies every completion queued so far without waiting.
	///
	/// Returns how many completions were processed, stale ones included.
	pub fn pump(&mut self) -> usize {
		let mut processed = 0;
		while let Ok(completion) = self.completion_rx.try_recv() {
			self.apply_completion(completion);
			processed += 1;
		}
		processed
	}

	/// Waits for the next completion and applies it.
	///
	/// Never resolves while no load is outstanding.
	pub async fn next_completion(&mut self) {
		if let Some(completion) = self.completion_rx.recv().await {
			self.apply_completion(completion);
		}
	}

	fn apply_completion(&mut self, completion: Completion) {
		let Completion {
			window,
			key,
			ticket,
			asset,
		} = completion;

		let current = self.records.get(&window).map(WindowRecord::attach_state);
		if current != Some(AttachState::Loading(ticket)) {
			tracing::debug!(window = %window, %key, ?ticket, ?current, "Discarding orphaned content load");
			if asset.is_some() {
				self.host.release(&key);
			}
			return;
		}

		let Some(asset) = asset else {
			let err = WindowError::LoadFailure { window: window.clone(), key };
			tracing::error!(window = %window, error = %err, "Window content failed to load");
			return;
		};

		let Some(record) = self.records.get_mut(&window) else {
			return;
		};
		let Some(content) = self.host.instantiate(record.placeholder, &asset) else {
			let err = WindowError::InstantiateFailed { key: key.clone() };
			tracing::error!(window = %window, error = %err, "Window content could not be instantiated");
			self.host.release(&key);
			return;
		};

		record.attach = AttachState::Loaded { content };
		record.behavior.on_content_attached(AttachContext {
			window: &window,
			content,
		});
		self.host.set_order(record.placeholder, record.order);
		self.host.set_visible(record.placeholder, record.active);
		tracing::debug!(window = %window, %key, active = record.active, "Content attached");

		if record.active {
			self.flush_pending(&window);
		}
	}

	/// Delivers `payload` now if `window` is visible, otherwise buffers it.
	///
	/// Only the most recent buffered payload survives.
	pub fn refresh(&mut self, window: impl Into<WindowId>, payload: Payload) -> RefreshOutcome {
		let id = window.into();
		let Some(record) = self.records.get_mut(&id) else {
			tracing::trace!(window = %id, "Refresh of unknown window ignored");
			return RefreshOutcome::Missing;
		};
		if record.is_visible() {
			deliver(&mut self.host, &self.refresh_event, record, &payload);
			return RefreshOutcome::Delivered;
		}
		if record.pending_refresh.replace(payload).is_some() {
			tracing::trace!(window = %id, "Superseded buffered refresh");
		}
		RefreshOutcome::Deferred
	}

	/// Delivers the buffered payload if the window is now visible.
	pub(super) fn flush_pending(&mut self, id: &WindowId) -> bool {
		let Some(record) = self.records.get_mut(id) else {
			return false;
		};
		if !record.is_visible() {
			return false;
		}
		let Some(payload) = record.pending_refresh.take() else {
			return false;
		};
		deliver(&mut self.host, &self.refresh_event, record, &payload);
		true
	}
}

fn deliver<N: Notifier>(notifier: &mut N, event: &str, record: &mut WindowRecord, payload: &Payload) {
	record.behavior.on_refresh(payload);
	if let Some(content) = record.content() {
		notifier.notify(content, event, payload);
	}
	tracing::trace!(window = %record.id, event, "Refresh delivered");
}
