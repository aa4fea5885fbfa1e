use serde::Deserialize;

/// Draw-order value. Higher values draw above lower ones.
pub type Order = i32;

/// Layering category governing base draw order and open/close behavior.
///
/// Variants are declared in ascending draw order; [`Tier::None`] marks a
/// window whose tier was never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
	/// Unassigned.
	#[default]
	None,
	/// Bottom-most windows underneath everything else.
	Base,
	/// Feature screens. Only the top of the stack is shown.
	Stack,
	/// Notification-style windows that pile up over each other.
	Overlay,
	/// Input-blocking masks.
	Mask,
	/// Always-on-top informational windows (marquees, busy prompts).
	Top,
}

impl Tier {
	/// Every tier in ascending draw order.
	pub const ALL: [Tier; 6] = [Tier::None, Tier::Base, Tier::Stack, Tier::Overlay, Tier::Mask, Tier::Top];

	/// Returns true for tiers whose orders accumulate above existing peers.
	pub const fn accumulates(self) -> bool {
		matches!(self, Tier::Stack | Tier::Overlay)
	}
}

/// Base draw order of every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TierBases {
	pub none: Order,
	pub base: Order,
	pub stack: Order,
	pub overlay: Order,
	pub mask: Order,
	pub top: Order,
}

impl Default for TierBases {
	fn default() -> Self {
		Self {
			none: 0,
			base: 1,
			stack: 2000,
			overlay: 4000,
			mask: 6000,
			top: 8000,
		}
	}
}

impl TierBases {
	/// Returns the base order of `tier`.
	pub const fn base(&self, tier: Tier) -> Order {
		match tier {
			Tier::None => self.none,
			Tier::Base => self.base,
			Tier::Stack => self.stack,
			Tier::Overlay => self.overlay,
			Tier::Mask => self.mask,
			Tier::Top => self.top,
		}
	}

	/// Returns the first tier whose base is not strictly above the previous tier's.
	pub(crate) fn first_unordered(&self) -> Option<Tier> {
		Tier::ALL
			.windows(2)
			.find(|pair| self.base(pair[0]) >= self.base(pair[1]))
			.map(|pair| pair[1])
	}
}
