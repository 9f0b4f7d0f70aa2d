/*
 * Error Module
 *
 * The field has a single runtime failure mode: no drawing surface at mount.
 * Invalid parameters are reported through the same type so the mount guard
 * can reject them before any particle is seeded.
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,

    #[error("invalid field parameters: {0}")]
    InvalidParams(&'static str),
}
