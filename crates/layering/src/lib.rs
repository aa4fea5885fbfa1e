//! Layering primitives for tiered windows.
//!
//! Every window lives in a [`Tier`]. Each tier owns a band of draw orders
//! starting at its base value ([`TierBases`]). Two tiers accumulate:
//!
//! - [`Tier::Stack`]: a logical stack where only the top entry is shown.
//!   Membership is tracked by [`StackTracker`].
//! - [`Tier::Overlay`]: every open window stays visible and each new one is
//!   drawn above the previous ones. Membership is tracked by [`OverlayTracker`].
//!
//! [`TierPolicy`] turns a tier plus the current membership into an [`Order`].
//! [`DrawList`] is a sorted snapshot used to answer "which window is on top".
//!
//! This crate holds no window state of its own; the registry that owns the
//! records lives in `strata-windows`.

mod id;
mod policy;
mod scene;
mod tier;
mod tracker;

pub use id::{ResourceKey, WindowId};
pub use policy::{DEFAULT_MARGIN, PolicyError, TierPolicy};
pub use scene::{DrawEntry, DrawList};
pub use tier::{Order, Tier, TierBases};
pub use tracker::{OverlayTracker, StackTracker};
