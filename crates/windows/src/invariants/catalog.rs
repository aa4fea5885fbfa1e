//! Catalog of invariants the window registry maintains between operations.

#![allow(dead_code)]

/// - At most one record exists per window identity; repeated opens reuse it.
///   - Enforced in: `WindowRegistry::open_with`
///   - Tested by: `invariants::test_one_record_per_identity`
///   - Failure symptom: Duplicate placeholders and doubled content loads.
pub(crate) const ONE_RECORD_PER_IDENTITY: () = ();

/// - Every stack member has a record with tier `Stack` that is active.
///   - Enforced in: `WindowRegistry::open_with`, `WindowRegistry::close`, `teardown`
///   - Tested by: `invariants::test_stack_members_active`
///   - Failure symptom: Closing a window reopens an identity that no longer exists.
pub(crate) const STACK_MEMBERS_ACTIVE: () = ();

/// - Every overlay member has a record with tier `Overlay` that is active.
///   - Enforced in: `WindowRegistry::open_with`, `teardown`
///   - Tested by: `invariants::test_overlay_members_active`
///   - Failure symptom: New overlays stack above windows that are no longer shown.
pub(crate) const OVERLAY_MEMBERS_ACTIVE: () = ();

/// - Opening into an accumulating tier assigns an order strictly above every
///   current peer in that tier.
///   - Enforced in: `TierPolicy::compute_order`
///   - Tested by: `invariants::test_monotonic_accumulated_order`
///   - Failure symptom: A newly opened overlay draws underneath an older one.
pub(crate) const MONOTONIC_ACCUMULATED_ORDER: () = ();

/// - A record without attached content is never shown by the host.
///   - Enforced in: `WindowRegistry::open_with`, `apply_completion`
///   - Tested by: `invariants::test_unloaded_never_visible`
///   - Failure symptom: Empty placeholders flash on screen; failed loads appear.
pub(crate) const UNLOADED_NEVER_VISIBLE: () = ();

/// - Each record issues at most one content load over its lifetime.
///   - Enforced in: `begin_load`
///   - Tested by: `invariants::test_single_flight_per_identity`
///   - Failure symptom: Reference counts in the loader drift upward.
pub(crate) const SINGLE_FLIGHT_PER_IDENTITY: () = ();

/// - A successful completion whose record is gone, or whose ticket is stale,
///   is discarded and released exactly once.
///   - Enforced in: `apply_completion`
///   - Tested by: `invariants::test_orphaned_completion_releases`
///   - Failure symptom: Content attached to a torn-down window, or a leaked asset.
pub(crate) const ORPHANED_COMPLETION_RELEASES: () = ();

/// - Every successful load is matched by exactly one release.
///   - Enforced in: `teardown`, `apply_completion`
///   - Tested by: `invariants::test_balanced_release`
///   - Failure symptom: Assets are never reclaimed, or reclaimed while in use.
pub(crate) const BALANCED_RELEASE: () = ();

/// - Refreshes buffered before a window is visible collapse to the latest
///   payload, delivered exactly once.
///   - Enforced in: `WindowRegistry::refresh`, `flush_pending`
///   - Tested by: `invariants::test_last_refresh_wins`
///   - Failure symptom: Windows render stale data or process the same update twice.
pub(crate) const LAST_REFRESH_WINS: () = ();
