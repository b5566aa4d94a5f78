// File: crates/assets/src/cache.rs
// Summary: Lazy, memoizing loader for the application's window icons.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use image::RgbaImage;
use tracing::{debug, trace};

use crate::error::IconError;
use crate::store::{EmbeddedResources, ResourceStore};

/// Which of the two packaged icons to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconVariant {
    /// Colored glyph on a dark tile.
    Standard,
    /// White-on-transparent rendition for dark window chrome.
    White,
}

impl IconVariant {
    /// Resource name baked in per variant.
    pub const fn resource_name(self) -> &'static str {
        match self {
            IconVariant::Standard => "icons/oscillo.png",
            IconVariant::White => "icons/oscillo-white.png",
        }
    }

    const fn slot_index(self) -> usize {
        match self {
            IconVariant::Standard => 0,
            IconVariant::White => 1,
        }
    }
}

/// Decodes each icon at most once and hands out the shared decoded image.
///
/// Each variant has its own slot. The slot lock spans the whole
/// locate-decode-store sequence, so concurrent first callers serialize and
/// exactly one of them decodes; everyone else clones the stored [`Arc`]. A
/// failed load leaves the slot empty, so a later call may retry.
pub struct IconCache<S = EmbeddedResources> {
    store: S,
    slots: [Mutex<Option<Arc<RgbaImage>>>; 2],
}

impl IconCache<EmbeddedResources> {
    /// Cache over the resources compiled into the binary.
    pub fn embedded() -> Self {
        Self::new(EmbeddedResources)
    }
}

impl<S: ResourceStore> IconCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            slots: [Mutex::new(None), Mutex::new(None)],
        }
    }

    /// Decoded image for `variant`, loading it on first use.
    ///
    /// Every successful call for the same variant returns the same allocation.
    pub fn get(&self, variant: IconVariant) -> Result<Arc<RgbaImage>, IconError> {
        // A slot is either empty or holds a fully decoded image, so a
        // poisoned lock still guards consistent state.
        let mut slot = self.slots[variant.slot_index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(image) = slot.as_ref() {
            trace!(?variant, "icon cache hit");
            return Ok(Arc::clone(image));
        }

        let name = variant.resource_name();
        let bytes = self
            .store
            .open(name)
            .ok_or(IconError::ResourceMissing(name))?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|source| IconError::Decode { name, source })?
            .to_rgba8();
        debug!(
            ?variant,
            width = decoded.width(),
            height = decoded.height(),
            "decoded embedded icon"
        );

        let image = Arc::new(decoded);
        *slot = Some(Arc::clone(&image));
        Ok(image)
    }
}

static APP_ICONS: OnceLock<IconCache> = OnceLock::new();

/// Process-wide icon cache over the embedded resources, created on first use.
pub fn app_icons() -> &'static IconCache {
    APP_ICONS.get_or_init(IconCache::embedded)
}
