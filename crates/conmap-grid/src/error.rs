use thiserror::Error;

use conmap_core::GeoBounds;

#[derive(Debug, Error)]
pub enum GridError {
    /// The viewport has `north < south` or `east < west`. Degenerate
    /// (point/line) viewports are accepted; inverted ones are not.
    #[error("inverted viewport bounds: {0:?}")]
    InvertedViewport(GeoBounds),

    /// Below the 6-decimal key resolution (or zero/negative/NaN).
    #[error("cell size must be at least 1e-6 degrees, got {0}")]
    InvalidCellSize(f64),

    /// The viewport would require more cells than the defensive cap allows.
    /// The map surface is expected to enforce a minimum zoom; this error is
    /// the backstop when it does not.
    #[error("viewport spans {cells} grid cells, exceeding the cap of {max}")]
    ViewportTooLarge { cells: usize, max: usize },
}
