pub(crate) mod catalog;

#[cfg(test)]
mod proofs;

#[cfg(test)]
#[allow(unused_imports)]
pub(crate) use proofs::{
	test_balanced_release, test_last_refresh_wins, test_monotonic_accumulated_order,
	test_one_record_per_identity, test_orphaned_completion_releases, test_overlay_members_active,
	test_single_flight_per_identity, test_stack_members_active, test_unloaded_never_visible,
};
