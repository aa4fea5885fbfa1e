//! Proofs for the window registry invariants.

use serde_json::json;
use strata_layering::Tier;

use crate::record::AttachState;
use crate::test_support::{assert_consistent, eager_registry, open_loaded, registry};

/// Repeated opens while loading and after loading reuse the same record.
#[cfg_attr(test, test)]
pub(crate) fn test_one_record_per_identity() {
	let (mut windows, _) = registry(&["Inventory"]);
	windows.open("Inventory", Tier::Stack);
	windows.open("Inventory", Tier::Stack);
	assert_eq!(windows.len(), 1);

	windows.host_mut().finish("Inventory");
	windows.pump();
	windows.open("Inventory", Tier::Overlay);
	assert_eq!(windows.len(), 1);
	assert_eq!(windows.records().filter(|r| r.id().as_str() == "Inventory").count(), 1);
}

/// Stack members stay active and stack-tiered across replacements and closes.
#[cfg_attr(test, test)]
pub(crate) fn test_stack_members_active() {
	let (mut windows, _) = eager_registry(&["A", "B", "C"]);
	windows.open("A", Tier::Stack);
	windows.pump();
	windows.open("B", Tier::Stack);
	assert_consistent(&windows);
	windows.open("B", Tier::Overlay);
	assert!(!windows.stack().contains(&"B".into()));
	assert_consistent(&windows);
	windows.open("C", Tier::Stack);
	windows.close("C");
	assert_consistent(&windows);
}

/// Reopening an overlay elsewhere removes it from the overlay set.
#[cfg_attr(test, test)]
pub(crate) fn test_overlay_members_active() {
	let (mut windows, _) = eager_registry(&["Toast", "Hud"]);
	windows.open("Toast", Tier::Overlay);
	windows.open("Hud", Tier::Overlay);
	windows.open("Toast", Tier::Top);
	assert_eq!(windows.overlays().len(), 1);
	assert_consistent(&windows);
	windows.close("Hud");
	assert!(windows.overlays().is_empty());
	assert_consistent(&windows);
}

/// Each overlay opened draws above every overlay already open.
#[cfg_attr(test, test)]
pub(crate) fn test_monotonic_accumulated_order() {
	let (mut windows, _) = registry(&["T1", "T2", "T3"]);
	let mut last = i32::MIN;
	for name in ["T1", "T2", "T3", "T1"] {
		windows.open(name, Tier::Overlay);
		let order = windows.lookup(name).map_or(i32::MIN, |r| r.order());
		assert!(order > last, "{name} got {order}, not above {last}");
		last = order;
	}
}

/// Placeholders stay hidden while loading and after a failed load.
#[cfg_attr(test, test)]
pub(crate) fn test_unloaded_never_visible() {
	let (mut windows, _) = registry(&["Broken"]);
	windows.open("Broken", Tier::Stack);
	assert!(!windows.is_visible("Broken"));
	assert_consistent(&windows);

	windows.host_mut().fail("Broken");
	windows.pump();
	windows.open("Broken", Tier::Stack);
	assert!(!windows.is_visible("Broken"));
	assert!(matches!(
		windows.lookup("Broken").map(|r| r.attach_state()),
		Some(AttachState::Loading(_))
	));
	assert_consistent(&windows);
}

/// A second open during the loading period never issues a second load.
#[cfg_attr(test, test)]
pub(crate) fn test_single_flight_per_identity() {
	let (mut windows, _) = registry(&["Profile"]);
	for _ in 0..3 {
		windows.open("Profile", Tier::Base);
	}
	assert_eq!(windows.host().loads_of("Profile"), 1);
	windows.host_mut().finish("Profile");
	windows.pump();
	windows.open("Profile", Tier::Base);
	assert_eq!(windows.host().loads_of("Profile"), 1);
}

/// Content arriving after teardown is released, never attached.
#[cfg_attr(test, test)]
pub(crate) fn test_orphaned_completion_releases() {
	let (mut windows, log) = registry(&["Mail"]);
	windows.open("Mail", Tier::Overlay);
	windows.close("Mail");
	assert_eq!(windows.host().releases_of("Mail"), 0);

	windows.host_mut().finish("Mail");
	assert_eq!(windows.pump(), 1);
	assert_eq!(windows.host().releases_of("Mail"), 1);
	assert!(windows.lookup("Mail").is_none());
	assert!(log.of("Mail").is_empty());
}

/// Loads and releases balance once every window is gone.
#[cfg_attr(test, test)]
pub(crate) fn test_balanced_release() {
	let (mut windows, _) = registry(&["A", "B", "C"]);
	open_loaded(&mut windows, "A", Tier::Stack);
	open_loaded(&mut windows, "B", Tier::Overlay);
	windows.open("C", Tier::Overlay);
	windows.remove_all();
	windows.host_mut().finish_all();
	windows.pump();

	let host = windows.host();
	for key in ["A", "B", "C"] {
		assert_eq!(host.loads_of(key), 1, "{key} loads");
		assert_eq!(host.releases_of(key), 1, "{key} releases");
	}
}

/// Only the latest buffered payload is delivered, once.
#[cfg_attr(test, test)]
pub(crate) fn test_last_refresh_wins() {
	let (mut windows, log) = registry(&["Profile"]);
	windows.open("Profile", Tier::Base);
	windows.refresh("Profile", json!({ "level": 1 }));
	windows.refresh("Profile", json!({ "level": 2 }));
	windows.host_mut().finish("Profile");
	windows.pump();
	windows.open("Profile", Tier::Base);

	assert_eq!(log.refreshes("Profile"), vec![json!({ "level": 2 })]);
}
