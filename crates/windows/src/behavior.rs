use strata_layering::WindowId;

use crate::host::{NodeId, Payload};

/// Context provided when visual content is attached to a window.
#[derive(Debug, Clone, Copy)]
pub struct AttachContext<'a> {
	/// Identity of the owning window.
	pub window: &'a WindowId,
	/// Node holding the instantiated content.
	pub content: NodeId,
}

/// Per-window capability hooks.
///
/// One implementation per window variant; the registry calls these instead of
/// relying on a shared base type.
pub trait WindowBehavior {
	/// Called once, after content is instantiated and parented.
	fn on_content_attached(&mut self, _ctx: AttachContext<'_>) {}

	/// Called with each refresh payload delivered to the window.
	fn on_refresh(&mut self, _payload: &Payload) {}

	/// Called before the window's content is released and destroyed.
	fn on_release(&mut self) {}
}

/// Behavior for windows that need no hooks.
#[derive(Debug, Default, Clone, Copy)]
pub struct Inert;

impl WindowBehavior for Inert {}
