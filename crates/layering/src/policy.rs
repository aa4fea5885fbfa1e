use thiserror::Error;

use crate::{Order, OverlayTracker, StackTracker, Tier, TierBases, WindowId};

/// Default increment between accumulated peers in the same tier.
///
/// Leaves room for effects layered directly above a window.
pub const DEFAULT_MARGIN: Order = 100;

/// Invalid tier/order configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
	/// A tier's base order is not strictly above the tier below it.
	#[error("base order of {tier:?} must be greater than the tier below it")]
	UnorderedBases {
		/// The offending tier.
		tier: Tier,
	},

	/// The accumulation margin is non-positive or does not fit between tiers.
	#[error("margin {margin} must be positive and smaller than the gap above {tier:?} ({gap})")]
	InvalidMargin {
		/// Configured margin.
		margin: Order,
		/// Accumulating tier whose band is too narrow.
		tier: Tier,
		/// Distance from that tier's base to the next tier's base.
		gap: Order,
	},
}

/// Computes draw orders per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPolicy {
	bases: TierBases,
	margin: Order,
}

impl Default for TierPolicy {
	fn default() -> Self {
		Self {
			bases: TierBases::default(),
			margin: DEFAULT_MARGIN,
		}
	}
}

impl TierPolicy {
	/// Creates a validated policy.
	pub fn new(bases: TierBases, margin: Order) -> Result<Self, PolicyError> {
		if let Some(tier) = bases.first_unordered() {
			return Err(PolicyError::UnorderedBases { tier });
		}
		for (tier, next) in [(Tier::Stack, Tier::Overlay), (Tier::Overlay, Tier::Mask)] {
			let gap = bases.base(next) - bases.base(tier);
			if margin <= 0 || margin >= gap {
				return Err(PolicyError::InvalidMargin { margin, tier, gap });
			}
		}
		Ok(Self { bases, margin })
	}

	pub const fn bases(&self) -> &TierBases {
		&self.bases
	}

	pub const fn margin(&self) -> Order {
		self.margin
	}

	/// Order a window falls back to when it leaves its tier's accumulation.
	pub const fn recover_order(&self, tier: Tier) -> Order {
		self.bases.base(tier)
	}

	/// Computes the order for a window entering `tier`.
	///
	/// Accumulating tiers land one margin above the highest tracked peer, or
	/// at the tier base when no peer is tracked. Other tiers always use their
	/// base. `order_of` resolves a peer's current order; peers it cannot
	/// resolve are ignored.
	///
	/// The entering window must already be removed from both trackers.
	pub fn compute_order<F>(&self, tier: Tier, stack: &StackTracker, overlays: &OverlayTracker, order_of: F) -> Order
	where
		F: Fn(&WindowId) -> Option<Order>,
	{
		let base = self.bases.base(tier);
		let peak = match tier {
			Tier::Stack => stack.iter().filter_map(&order_of).max(),
			Tier::Overlay => overlays.iter().filter_map(&order_of).max(),
			_ => None,
		};
		peak.map_or(base, |peak| peak.saturating_add(self.margin).max(base))
	}
}
