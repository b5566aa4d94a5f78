// File: crates/assets/src/error.rs
// Summary: Error type for embedded icon lookup and decoding.

use thiserror::Error;

/// Failure modes of [`IconCache::get`](crate::IconCache::get).
///
/// Both are local to the failing call: the cache slot stays unpopulated and a
/// later call may retry.
#[derive(Debug, Error)]
pub enum IconError {
    /// No stream with this name exists in the resource store.
    #[error("embedded resource `{0}` not found")]
    ResourceMissing(&'static str),

    /// The stream exists but is not a valid image.
    #[error("embedded resource `{name}` is not a valid image")]
    Decode {
        name: &'static str,
        #[source]
        source: image::ImageError,
    },
}
