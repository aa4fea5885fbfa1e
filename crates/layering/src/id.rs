use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Stable key naming one logical window.
///
/// Cloning is cheap; the underlying string is shared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(Arc<str>);

/// Key of the visual content loaded for a window.
///
/// Defaults to the window identity when a window does not name its own content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey(Arc<str>);

macro_rules! string_key {
	($name:ident) => {
		impl $name {
			pub fn new(key: impl AsRef<str>) -> Self {
				Self(Arc::from(key.as_ref()))
			}

			pub fn as_str(&self) -> &str {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}

		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}

		impl From<&str> for $name {
			fn from(key: &str) -> Self {
				Self::new(key)
			}
		}

		impl From<String> for $name {
			fn from(key: String) -> Self {
				Self(Arc::from(key))
			}
		}

		impl From<&$name> for $name {
			fn from(key: &$name) -> Self {
				key.clone()
			}
		}
	};
}

string_key!(WindowId);
string_key!(ResourceKey);

impl From<&WindowId> for ResourceKey {
	fn from(id: &WindowId) -> Self {
		Self(Arc::clone(&id.0))
	}
}
