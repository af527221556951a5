//! Error types
//!
//! The physics core recovers degenerate geometry locally; only invalid
//! construction parameters, bad timesteps, and config loading surface here.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{what} radius must be positive and finite, got {value}")]
    InvalidRadius { what: &'static str, value: f32 },
    #[error("{what} must be finite")]
    NonFinite { what: &'static str },
    #[error("timestep must be non-negative and finite, got {0}")]
    InvalidTimestep(f32),
    #[error("Failed to read config file {path:?}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject a non-finite scalar
pub(crate) fn ensure_finite(what: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { what })
    }
}

/// Reject a vector with any non-finite component
pub(crate) fn ensure_finite_vec(what: &'static str, value: glam::Vec2) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { what })
    }
}

/// Reject a radius that is not strictly positive and finite
pub(crate) fn ensure_radius(what: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRadius { what, value })
    }
}
