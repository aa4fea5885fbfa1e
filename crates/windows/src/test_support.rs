//! In-memory host and recording behaviors shared by unit tests and proofs.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use strata_layering::{Order, ResourceKey, Tier, WindowId};

use crate::behavior::{AttachContext, WindowBehavior};
use crate::catalog::WindowCatalog;
use crate::host::{Asset, AssetLoader, LoadCompleter, NodeId, Notifier, Payload, VisualHost};
use crate::registry::WindowRegistry;

pub(crate) fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::TRACE)
		.with_test_writer()
		.try_init();
}

/// Scene graph and loader that record every call.
///
/// Loads stay in flight until a test finishes them, unless the host was
/// built with [`FakeHost::synchronous`].
#[derive(Default)]
pub(crate) struct FakeHost {
	next_node: u64,
	synchronous: bool,
	pub(crate) refuse_instantiate: bool,
	pub(crate) in_flight: Vec<LoadCompleter>,
	pub(crate) loads: Vec<ResourceKey>,
	pub(crate) releases: Vec<ResourceKey>,
	pub(crate) visible: FxHashMap<NodeId, bool>,
	pub(crate) orders: FxHashMap<NodeId, Order>,
	pub(crate) parents: FxHashMap<NodeId, NodeId>,
	pub(crate) destroyed: Vec<NodeId>,
	pub(crate) notifications: Vec<(NodeId, String, Payload)>,
}

impl FakeHost {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Completes every load successfully before `load` returns.
	pub(crate) fn synchronous() -> Self {
		Self {
			synchronous: true,
			..Self::default()
		}
	}

	fn take(&mut self, key: &str) -> Option<LoadCompleter> {
		let index = self.in_flight.iter().position(|completer| completer.key().as_str() == key)?;
		Some(self.in_flight.remove(index))
	}

	/// Succeeds the oldest in-flight load of `key`.
	pub(crate) fn finish(&mut self, key: &str) -> bool {
		self.take(key).is_some_and(|completer| completer.succeed(key.to_string()))
	}

	/// Fails the oldest in-flight load of `key`.
	pub(crate) fn fail(&mut self, key: &str) -> bool {
		self.take(key).is_some_and(LoadCompleter::fail)
	}

	pub(crate) fn finish_all(&mut self) -> usize {
		let pending = std::mem::take(&mut self.in_flight);
		let count = pending.len();
		for completer in pending {
			let key = completer.key().to_string();
			completer.succeed(key);
		}
		count
	}

	pub(crate) fn loads_of(&self, key: &str) -> usize {
		self.loads.iter().filter(|k| k.as_str() == key).count()
	}

	pub(crate) fn releases_of(&self, key: &str) -> usize {
		self.releases.iter().filter(|k| k.as_str() == key).count()
	}

	pub(crate) fn is_shown(&self, node: NodeId) -> bool {
		self.visible.get(&node).copied().unwrap_or(false)
	}

	pub(crate) fn is_destroyed(&self, node: NodeId) -> bool {
		self.destroyed.contains(&node)
	}

	fn mint(&mut self) -> NodeId {
		self.next_node += 1;
		NodeId(self.next_node)
	}
}

impl AssetLoader for FakeHost {
	fn load(&mut self, key: &ResourceKey, completer: LoadCompleter) {
		self.loads.push(key.clone());
		if self.synchronous {
			completer.succeed(key.to_string());
		} else {
			self.in_flight.push(completer);
		}
	}

	fn release(&mut self, key: &ResourceKey) {
		self.releases.push(key.clone());
	}
}

impl VisualHost for FakeHost {
	fn spawn_placeholder(&mut self, _window: &WindowId) -> NodeId {
		let node = self.mint();
		self.visible.insert(node, false);
		node
	}

	fn instantiate(&mut self, parent: NodeId, _asset: &Asset) -> Option<NodeId> {
		if self.refuse_instantiate {
			return None;
		}
		let node = self.mint();
		self.parents.insert(node, parent);
		Some(node)
	}

	fn set_visible(&mut self, node: NodeId, visible: bool) {
		self.visible.insert(node, visible);
	}

	fn set_order(&mut self, node: NodeId, order: Order) {
		self.orders.insert(node, order);
	}

	fn destroy(&mut self, node: NodeId) {
		self.visible.remove(&node);
		self.destroyed.push(node);
	}
}

impl Notifier for FakeHost {
	fn notify(&mut self, node: NodeId, event: &str, payload: &Payload) {
		self.notifications.push((node, event.to_string(), payload.clone()));
	}
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Hook {
	Attached(NodeId),
	Refreshed(Payload),
	Released,
}

/// Shared log of behavior hook calls, keyed by window name.
#[derive(Clone, Default)]
pub(crate) struct HookLog(Rc<RefCell<Vec<(String, Hook)>>>);

impl HookLog {
	pub(crate) fn behavior(&self, name: &str) -> Box<dyn WindowBehavior> {
		Box::new(Recording {
			name: name.to_string(),
			log: self.clone(),
		})
	}

	pub(crate) fn of(&self, name: &str) -> Vec<Hook> {
		self.0
			.borrow()
			.iter()
			.filter(|(owner, _)| owner == name)
			.map(|(_, hook)| hook.clone())
			.collect()
	}

	pub(crate) fn refreshes(&self, name: &str) -> Vec<Payload> {
		self.of(name)
			.into_iter()
			.filter_map(|hook| match hook {
				Hook::Refreshed(payload) => Some(payload),
				_ => None,
			})
			.collect()
	}
}

struct Recording {
	name: String,
	log: HookLog,
}

impl Recording {
	fn push(&self, hook: Hook) {
		self.log.0.borrow_mut().push((self.name.clone(), hook));
	}
}

impl WindowBehavior for Recording {
	fn on_content_attached(&mut self, ctx: AttachContext<'_>) {
		self.push(Hook::Attached(ctx.content));
	}

	fn on_refresh(&mut self, payload: &Payload) {
		self.push(Hook::Refreshed(payload.clone()));
	}

	fn on_release(&mut self) {
		self.push(Hook::Released);
	}
}

pub(crate) fn catalog(names: &[&str], log: &HookLog) -> WindowCatalog {
	let mut catalog = WindowCatalog::new();
	for name in names {
		let name = name.to_string();
		let log = log.clone();
		catalog.register(name.clone(), move || log.behavior(&name));
	}
	catalog
}

/// Registry whose loads stay in flight until finished explicitly.
pub(crate) fn registry(names: &[&str]) -> (WindowRegistry<FakeHost>, HookLog) {
	let log = HookLog::default();
	(WindowRegistry::new(FakeHost::new(), catalog(names, &log)), log)
}

/// Registry whose loads complete as soon as they are pumped.
pub(crate) fn eager_registry(names: &[&str]) -> (WindowRegistry<FakeHost>, HookLog) {
	let log = HookLog::default();
	(WindowRegistry::new(FakeHost::synchronous(), catalog(names, &log)), log)
}

/// Opens `window` and pumps its completion.
pub(crate) fn open_loaded(registry: &mut WindowRegistry<FakeHost>, window: &str, tier: Tier) {
	registry.open(window, tier);
	registry.host_mut().finish(window);
	registry.pump();
}

/// Checks the structural invariants that must hold between any two operations.
pub(crate) fn assert_consistent(registry: &WindowRegistry<FakeHost>) {
	for id in registry.stack().iter() {
		let record = registry
			.lookup(id.as_str())
			.unwrap_or_else(|| panic!("stack member {id} has no record"));
		assert_eq!(record.tier(), Tier::Stack, "stack member {id} has tier {:?}", record.tier());
		assert!(record.is_active(), "stack member {id} is inactive");
	}
	for id in registry.overlays().iter() {
		let record = registry
			.lookup(id.as_str())
			.unwrap_or_else(|| panic!("overlay member {id} has no record"));
		assert_eq!(record.tier(), Tier::Overlay, "overlay member {id} has tier {:?}", record.tier());
		assert!(record.is_active(), "overlay member {id} is inactive");
	}
	for record in registry.records() {
		if !record.is_loaded() {
			assert!(
				!registry.host().is_shown(record.placeholder_node()),
				"unloaded window {} is shown",
				record.id()
			);
		}
		assert_eq!(
			registry.host().is_shown(record.placeholder_node()),
			record.is_visible(),
			"host visibility of {} disagrees with its record",
			record.id()
		);
	}
	let host = registry.host();
	for record in registry.records() {
		let key = record.resource_key().as_str();
		let outstanding = host.loads_of(key) as isize - host.releases_of(key) as isize;
		assert!(outstanding >= 0, "{key} released more often than loaded");
	}
}
