//! Per-window state owned by the registry.

use std::fmt;

use smallvec::SmallVec;
use strata_layering::{Order, ResourceKey, Tier, WindowId};

use crate::behavior::WindowBehavior;
use crate::host::{LoadTicket, NodeId, Payload};

/// Progress of a window's visual content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachState {
	/// Record exists; no load has been requested.
	Placeholder,
	/// A load is outstanding. Failed loads stay here.
	Loading(LoadTicket),
	/// Content is instantiated under the placeholder.
	Loaded {
		/// Node holding the instantiated content.
		content: NodeId,
	},
}

/// A child window created from a template and owned by its parent record.
pub struct SubWindow {
	pub key: ResourceKey,
	pub node: NodeId,
	pub(crate) behavior: Box<dyn WindowBehavior>,
}

impl fmt::Debug for SubWindow {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SubWindow")
			.field("key", &self.key)
			.field("node", &self.node)
			.finish_non_exhaustive()
	}
}

/// State of one logical window.
pub struct WindowRecord {
	pub(crate) id: WindowId,
	pub(crate) resource_key: ResourceKey,
	pub(crate) tier: Tier,
	pub(crate) order: Order,
	pub(crate) active: bool,
	pub(crate) attach: AttachState,
	pub(crate) pending_refresh: Option<Payload>,
	pub(crate) destroy_on_switch: bool,
	pub(crate) placeholder: NodeId,
	pub(crate) sub_windows: SmallVec<[SubWindow; 2]>,
	pub(crate) behavior: Box<dyn WindowBehavior>,
}

impl fmt::Debug for WindowRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WindowRecord")
			.field("id", &self.id)
			.field("resource_key", &self.resource_key)
			.field("tier", &self.tier)
			.field("order", &self.order)
			.field("active", &self.active)
			.field("attach", &self.attach)
			.field("pending_refresh", &self.pending_refresh.is_some())
			.field("destroy_on_switch", &self.destroy_on_switch)
			.field("sub_windows", &self.sub_windows)
			.finish_non_exhaustive()
	}
}

impl WindowRecord {
	pub(crate) fn placeholder(
		id: WindowId,
		resource_key: ResourceKey,
		behavior: Box<dyn WindowBehavior>,
		placeholder: NodeId,
		order: Order,
	) -> Self {
		Self {
			id,
			resource_key,
			tier: Tier::None,
			order,
			active: false,
			attach: AttachState::Placeholder,
			pending_refresh: None,
			destroy_on_switch: true,
			placeholder,
			sub_windows: SmallVec::new(),
			behavior,
		}
	}

	pub fn id(&self) -> &WindowId {
		&self.id
	}

	pub fn resource_key(&self) -> &ResourceKey {
		&self.resource_key
	}

	pub fn tier(&self) -> Tier {
		self.tier
	}

	pub fn order(&self) -> Order {
		self.order
	}

	/// Whether the window is currently marked shown.
	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn attach_state(&self) -> AttachState {
		self.attach
	}

	/// Whether visual content has been attached.
	pub fn is_loaded(&self) -> bool {
		matches!(self.attach, AttachState::Loaded { .. })
	}

	/// Whether the window is both active and loaded, i.e. actually rendered.
	pub fn is_visible(&self) -> bool {
		self.active && self.is_loaded()
	}

	/// Node holding the attached content, if any.
	pub fn content(&self) -> Option<NodeId> {
		match self.attach {
			AttachState::Loaded { content } => Some(content),
			_ => None,
		}
	}

	pub fn placeholder_node(&self) -> NodeId {
		self.placeholder
	}

	pub fn pending_refresh(&self) -> Option<&Payload> {
		self.pending_refresh.as_ref()
	}

	/// Whether a context switch sweeps this window away.
	pub fn destroy_on_switch(&self) -> bool {
		self.destroy_on_switch
	}

	pub fn sub_windows(&self) -> &[SubWindow] {
		&self.sub_windows
	}
}
