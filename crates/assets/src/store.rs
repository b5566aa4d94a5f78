// File: crates/assets/src/store.rs
// Summary: Name-addressed access to binary resources embedded in the compiled binary.

use std::borrow::Cow;
use std::sync::Arc;

const ICON_STANDARD: &[u8] = include_bytes!("../assets/icon.png");
const ICON_WHITE: &[u8] = include_bytes!("../assets/icon-white.png");

/// Read-only store of named binary resources.
///
/// Returns `None` when no resource carries the requested name; the caller
/// decides whether that is an error.
pub trait ResourceStore {
    fn open(&self, name: &str) -> Option<Cow<'static, [u8]>>;
}

/// Resources compiled into the binary via `include_bytes!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedResources;

impl ResourceStore for EmbeddedResources {
    fn open(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        match name {
            "icons/oscillo.png" => Some(Cow::Borrowed(ICON_STANDARD)),
            "icons/oscillo-white.png" => Some(Cow::Borrowed(ICON_WHITE)),
            _ => None,
        }
    }
}

/// Lets a shared store back a cache without giving up the handle.
impl<S: ResourceStore + ?Sized> ResourceStore for Arc<S> {
    fn open(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        (**self).open(name)
    }
}
