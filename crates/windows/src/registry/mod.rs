//! The window registry: record ownership, lifecycle operations, and content attachment.
//!
//! All mutation happens on the thread that owns the registry. Content loads
//! complete through a channel and are applied by [`WindowRegistry::pump`] or
//! [`WindowRegistry::next_completion`], never from inside the loader.

use indexmap::IndexMap;
use strata_layering::{DrawEntry, DrawList, OverlayTracker, StackTracker, TierPolicy, WindowId};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::catalog::WindowCatalog;
use crate::config::{ConfigError, LayerConfig};
use crate::error::{Result, WindowError};
use crate::host::{Completion, Host, LoadTicket};
use crate::record::WindowRecord;
use crate::templates::TemplateStore;

mod attach;
mod lifecycle;
mod sub_windows;

pub use lifecycle::{CloseOutcome, OpenOrRefresh, OpenOutcome, RefreshOutcome};

type CloseListener = Box<dyn FnMut(&WindowId)>;

/// Owns every window record and the tier membership derived from them.
///
/// Constructed once per session and passed to whoever opens windows.
pub struct WindowRegistry<H: Host> {
	host: H,
	catalog: WindowCatalog,
	policy: TierPolicy,
	refresh_event: String,
	records: IndexMap<WindowId, WindowRecord>,
	stack: StackTracker,
	overlays: OverlayTracker,
	templates: TemplateStore,
	close_listeners: Vec<CloseListener>,
	last_ticket: LoadTicket,
	completion_tx: UnboundedSender<Completion>,
	completion_rx: UnboundedReceiver<Completion>,
}

impl<H: Host> std::fmt::Debug for WindowRegistry<H> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WindowRegistry")
			.field("policy", &self.policy)
			.field("records", &self.records)
			.field("stack", &self.stack)
			.field("overlays", &self.overlays)
			.field("templates", &self.templates.len())
			.finish_non_exhaustive()
	}
}

impl<H: Host> WindowRegistry<H> {
	/// Creates a registry with the default layering configuration.
	pub fn new(host: H, catalog: WindowCatalog) -> Self {
		Self::build(host, catalog, TierPolicy::default(), LayerConfig::default().refresh_event)
	}

	/// Creates a registry from a validated configuration.
	pub fn with_config(host: H, catalog: WindowCatalog, config: &LayerConfig) -> std::result::Result<Self, ConfigError> {
		let policy = config.policy()?;
		Ok(Self::build(host, catalog, policy, config.refresh_event.clone()))
	}

	fn build(host: H, catalog: WindowCatalog, policy: TierPolicy, refresh_event: String) -> Self {
		let (completion_tx, completion_rx) = mpsc::unbounded_channel();
		Self {
			host,
			catalog,
			policy,
			refresh_event,
			records: IndexMap::new(),
			stack: StackTracker::default(),
			overlays: OverlayTracker::default(),
			templates: TemplateStore::default(),
			close_listeners: Vec::new(),
			last_ticket: LoadTicket::default(),
			completion_tx,
			completion_rx,
		}
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	pub fn catalog_mut(&mut self) -> &mut WindowCatalog {
		&mut self.catalog
	}

	pub fn policy(&self) -> &TierPolicy {
		&self.policy
	}

	/// Returns the record for `window`, loaded or not.
	pub fn lookup(&self, window: &str) -> Option<&WindowRecord> {
		self.records.get(window)
	}

	/// Iterates records in creation order.
	pub fn records(&self) -> impl Iterator<Item = &WindowRecord> {
		self.records.values()
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Stack-tier membership, bottom to top.
	pub fn stack(&self) -> &StackTracker {
		&self.stack
	}

	/// Open overlay-tier windows.
	pub fn overlays(&self) -> &OverlayTracker {
		&self.overlays
	}

	/// Whether `window` exists, is active, and has content attached.
	pub fn is_visible(&self, window: &str) -> bool {
		self.lookup(window).is_some_and(WindowRecord::is_visible)
	}

	/// Whether `window` exists and is marked active, loaded or not.
	pub fn is_active(&self, window: &str) -> bool {
		self.lookup(window).is_some_and(WindowRecord::is_active)
	}

	/// Returns the record only once its content is attached.
	pub fn get_loaded(&self, window: &str) -> Result<&WindowRecord> {
		let Some(record) = self.lookup(window) else {
			let err = WindowError::NotFound {
				window: WindowId::from(window),
			};
			tracing::warn!(window, error = %err, "Lookup of unknown window");
			return Err(err);
		};
		if !record.is_loaded() {
			return Err(WindowError::NotReady {
				window: record.id.clone(),
			});
		}
		Ok(record)
	}

	/// Snapshot of every record sorted bottom to top.
	pub fn draw_list(&self) -> DrawList {
		DrawList::from_entries(self.records.values().map(|record| DrawEntry {
			window: record.id.clone(),
			tier: record.tier,
			order: record.order,
			visible: record.is_visible(),
		}))
	}

	/// Returns the visible stack- or overlay-tier window with the highest order.
	pub fn top_most(&self) -> Option<WindowId> {
		self.draw_list().top_most().map(|entry| entry.window.clone())
	}

	/// Registers a callback run after every successful [`Self::close`].
	pub fn on_close(&mut self, listener: impl FnMut(&WindowId) + 'static) {
		self.close_listeners.push(Box::new(listener));
	}
}
