use thiserror::Error;

/// Failures surfaced by generation
///
/// Name collisions among siblings are recovered internally by retrying with
/// the next discriminator and never reach this type. Running out of room
/// inside a sphere of influence is normal loop termination, not an error.
#[derive(Debug, Error)]
pub enum GenError {
    /// An orbit or ring computation produced a degenerate range —
    /// non-finite bounds or a non-positive parent mass/radius.
    #[error("constraint violation at {body}: {detail}")]
    ConstraintViolation { body: String, detail: String },

    /// An external service (name, noise, image) failed; fatal for the
    /// body or map being produced but siblings stay intact.
    #[error("resource unavailable at {body}: {detail}")]
    ResourceUnavailable { body: String, detail: String },
}
