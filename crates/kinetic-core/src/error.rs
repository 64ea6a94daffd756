// File: crates/kinetic-core/src/error.rs
// Summary: Typed error for render/encode paths. Data-shape problems degrade silently instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode {format} output")]
    Encode { format: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
