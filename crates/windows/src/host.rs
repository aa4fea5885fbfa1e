//! Collaborators supplied by the embedding application.
//!
//! The registry drives three external services:
//!
//! - [`AssetLoader`] fetches visual content asynchronously and reference-counts it.
//! - [`VisualHost`] owns the scene graph: placeholders, instantiated content,
//!   visibility, and draw order.
//! - [`Notifier`] hands payloads to already-visible windows.
//!
//! Embedders usually implement all three on one type, which then satisfies
//! [`Host`] automatically.

use std::any::Any;
use std::fmt;

use strata_layering::{Order, ResourceKey, WindowId};
use tokio::sync::mpsc::UnboundedSender;

/// Type-erased visual content produced by an [`AssetLoader`].
pub type Asset = Box<dyn Any + Send>;

/// Data delivered to a window on refresh.
pub type Payload = serde_json::Value;

/// Handle to a node in the host's scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Tag identifying one content-load request.
///
/// Completions carrying a ticket other than the record's current one are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LoadTicket(pub(crate) u64);

impl LoadTicket {
	pub(crate) fn next(self) -> Self {
		Self(self.0.wrapping_add(1))
	}
}

/// Outcome of one load, queued for the registry's thread.
pub(crate) struct Completion {
	pub(crate) window: WindowId,
	pub(crate) key: ResourceKey,
	pub(crate) ticket: LoadTicket,
	pub(crate) asset: Option<Asset>,
}

impl fmt::Debug for Completion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Completion")
			.field("window", &self.window)
			.field("key", &self.key)
			.field("ticket", &self.ticket)
			.field("loaded", &self.asset.is_some())
			.finish()
	}
}

/// One-shot callback handed to [`AssetLoader::load`].
///
/// Completing only enqueues; nothing is attached until the registry drains
/// its completions. May be moved to and completed from any thread.
#[derive(Debug)]
pub struct LoadCompleter {
	window: WindowId,
	key: ResourceKey,
	ticket: LoadTicket,
	tx: UnboundedSender<Completion>,
}

impl LoadCompleter {
	pub(crate) fn new(window: WindowId, key: ResourceKey, ticket: LoadTicket, tx: UnboundedSender<Completion>) -> Self {
		Self { window, key, ticket, tx }
	}

	/// Window the content is destined for.
	pub fn window(&self) -> &WindowId {
		&self.window
	}

	/// Resource being loaded.
	pub fn key(&self) -> &ResourceKey {
		&self.key
	}

	pub fn ticket(&self) -> LoadTicket {
		self.ticket
	}

	/// Reports the load result. `None` signals failure.
	///
	/// Returns false if the registry no longer exists.
	pub fn complete(self, asset: Option<Asset>) -> bool {
		let completion = Completion {
			window: self.window,
			key: self.key,
			ticket: self.ticket,
			asset,
		};
		match self.tx.send(completion) {
			Ok(()) => true,
			Err(err) => {
				tracing::trace!(window = %err.0.window, "Registry dropped before load completed");
				false
			}
		}
	}

	/// Reports successfully loaded content.
	pub fn succeed(self, asset: impl Any + Send) -> bool {
		self.complete(Some(Box::new(asset)))
	}

	/// Reports that no content could be loaded.
	pub fn fail(self) -> bool {
		self.complete(None)
	}
}

/// Asynchronous, reference-counted content loading.
pub trait AssetLoader {
	/// Starts loading `key`. The loader must eventually call exactly one of the
	/// completer's methods; it may do so before returning.
	fn load(&mut self, key: &ResourceKey, completer: LoadCompleter);

	/// Drops one reference to a successfully loaded `key`.
	fn release(&mut self, key: &ResourceKey);
}

/// Scene-graph primitives.
pub trait VisualHost {
	/// Creates an empty, hidden logical node for a window.
	fn spawn_placeholder(&mut self, window: &WindowId) -> NodeId;

	/// Instantiates `asset` as a child of `parent`.
	fn instantiate(&mut self, parent: NodeId, asset: &Asset) -> Option<NodeId>;

	fn set_visible(&mut self, node: NodeId, visible: bool);

	fn set_order(&mut self, node: NodeId, order: Order);

	/// Destroys `node` and everything parented under it.
	fn destroy(&mut self, node: NodeId);
}

/// Fire-and-forget delivery to a window's visual content.
pub trait Notifier {
	fn notify(&mut self, node: NodeId, event: &str, payload: &Payload);
}

/// Everything a [`crate::WindowRegistry`] needs from its embedder.
pub trait Host: AssetLoader + VisualHost + Notifier {}

impl<T: AssetLoader + VisualHost + Notifier> Host for T {}
