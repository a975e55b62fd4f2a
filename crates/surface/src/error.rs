use thiserror::Error;

/// Failures while rendering or writing surface maps
///
/// Fatal for the map being produced; cached fields and other bodies are
/// unaffected.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The image encoder/sink rejected the write.
    #[error("could not write {path}: {source}")]
    ResourceUnavailable {
        path: String,
        #[source]
        source: image::ImageError,
    },

    /// A pixel buffer did not match its declared dimensions.
    #[error("pixel buffer does not match {width}x{height}")]
    BufferMismatch { width: u32, height: u32 },
}
