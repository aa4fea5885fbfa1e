//! Window registry with tiered layering and asynchronous content attachment.
//!
//! A [`WindowRegistry`] owns one [`WindowRecord`] per logical window. Opening
//! an unknown window creates a placeholder immediately and asks the host's
//! [`AssetLoader`] for its content; the content is attached later, when the
//! owning thread drains completions with [`WindowRegistry::pump`] or
//! [`WindowRegistry::next_completion`].
//!
//! # Tiers
//!
//! Draw orders and membership come from `strata-layering`:
//!
//! - opening a [`Tier::Stack`] window tears down whatever was on top of the stack
//! - [`Tier::Overlay`] windows accumulate, each drawn above the previous one
//! - every other tier draws at its fixed base order
//!
//! # Host
//!
//! Rendering, asset loading, and event transport are supplied by the embedder
//! through the [`Host`] traits. The registry never blocks and never touches a
//! record from another thread; completions are queued by [`LoadCompleter`] and
//! applied on the registry's thread.
//!
//! # Example
//!
//! ```ignore
//! let mut catalog = WindowCatalog::new();
//! catalog.register("Inventory", || Box::new(InventoryWindow::default()));
//!
//! let mut windows = WindowRegistry::new(host, catalog);
//! windows.open("Inventory", Tier::Stack);
//! windows.refresh("Inventory", json!({ "slots": 24 }));
//! // later, on the same thread
//! windows.pump();
//! ```

pub mod behavior;
pub mod catalog;
pub mod config;
pub mod error;
pub mod host;
mod invariants;
pub mod record;
pub mod registry;
mod templates;

#[cfg(test)]
pub(crate) mod test_support;

pub use behavior::{AttachContext, Inert, WindowBehavior};
pub use catalog::{WindowCatalog, WindowFactory};
pub use config::{ConfigError, LayerConfig};
pub use error::{Result, WindowError};
pub use host::{
	Asset, AssetLoader, Host, LoadCompleter, LoadTicket, NodeId, Notifier, Payload, VisualHost,
};
pub use record::{AttachState, SubWindow, WindowRecord};
pub use registry::{CloseOutcome, OpenOrRefresh, OpenOutcome, RefreshOutcome, WindowRegistry};
pub use strata_layering::{Order, ResourceKey, Tier, TierBases, TierPolicy, WindowId};
