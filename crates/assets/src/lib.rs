// File: crates/assets/src/lib.rs
// Summary: Library entry point; exports the embedded resource store and the icon cache.

pub mod cache;
pub mod error;
pub mod store;

pub use cache::{app_icons, IconCache, IconVariant};
pub use error::IconError;
pub use store::{EmbeddedResources, ResourceStore};
