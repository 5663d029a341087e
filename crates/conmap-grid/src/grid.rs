//! Fixed-size lat/lng grid generation over a viewport.
//!
//! Cells tile the viewport's bounding box exactly: the south-west corner is
//! snapped down to a cell-size multiple and the north-east corner snapped up,
//! so partial cells overshoot the viewport edge rather than being clipped.

use conmap_core::GeoBounds;

use crate::error::GridError;

/// Default cell edge length in degrees, ~1 km at the equator. The physical
/// size shrinks toward the poles; this is a known, uncorrected limitation.
pub const DEFAULT_CELL_SIZE_DEG: f64 = 0.009;

/// Defensive cap on cells per grid. The map surface's minimum zoom is the
/// primary safeguard; exceeding this cap is an error rather than an
/// unbounded allocation.
pub const MAX_GRID_CELLS: usize = 20_000;

/// Smallest permitted cell size. Keys carry 6 decimal places, so anything
/// finer would collide adjacent cells onto the same key.
pub const MIN_CELL_SIZE_DEG: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One aggregation cell of the density grid. Rebuilt fresh on every
/// recomputation, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub bounds: GeoBounds,
    pub center: LatLng,
    /// Stable identifier derived from the snapped south-west corner at fixed
    /// 6-decimal precision, so float jitter cannot split or merge cells
    /// across recomputation.
    pub key: String,
    pub store_count: usize,
}

/// Generate the grid of fixed-size cells covering `viewport`.
///
/// Snapping works in integer index space (floor of south/west, ceiling of
/// north/east, both divided by `cell_size_deg`) and multiplies back out, so
/// a given cell always gets bit-identical bounds and key regardless of which
/// viewport requested it. Cells are emitted row-major, south to north, each
/// row west to east. A degenerate viewport still yields the single cell
/// containing the point.
///
/// # Errors
///
/// - [`GridError::InvertedViewport`] if `north < south` or `east < west`.
/// - [`GridError::InvalidCellSize`] if `cell_size_deg` is below
///   [`MIN_CELL_SIZE_DEG`] (which also rejects zero, negatives, and NaN).
/// - [`GridError::ViewportTooLarge`] if the grid would exceed
///   [`MAX_GRID_CELLS`].
pub fn generate_grid(viewport: &GeoBounds, cell_size_deg: f64) -> Result<Vec<GridCell>, GridError> {
    if !viewport.is_well_formed() {
        return Err(GridError::InvertedViewport(*viewport));
    }
    if !(cell_size_deg >= MIN_CELL_SIZE_DEG) || !cell_size_deg.is_finite() {
        return Err(GridError::InvalidCellSize(cell_size_deg));
    }

    #[allow(clippy::cast_possible_truncation)]
    let south_idx = (viewport.south / cell_size_deg).floor() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let mut north_idx = (viewport.north / cell_size_deg).ceil() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let west_idx = (viewport.west / cell_size_deg).floor() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let mut east_idx = (viewport.east / cell_size_deg).ceil() as i64;

    // A bound sitting exactly on a grid line collapses its axis to zero
    // rows/columns; force at least one so a point viewport maps to one cell.
    if north_idx <= south_idx {
        north_idx = south_idx + 1;
    }
    if east_idx <= west_idx {
        east_idx = west_idx + 1;
    }

    let rows = usize::try_from(north_idx - south_idx).unwrap_or(usize::MAX);
    let cols = usize::try_from(east_idx - west_idx).unwrap_or(usize::MAX);
    let total = rows.checked_mul(cols).unwrap_or(usize::MAX);
    if total > MAX_GRID_CELLS {
        return Err(GridError::ViewportTooLarge {
            cells: total,
            max: MAX_GRID_CELLS,
        });
    }

    let mut cells = Vec::with_capacity(total);
    for row in south_idx..north_idx {
        #[allow(clippy::cast_precision_loss)]
        let south = row as f64 * cell_size_deg;
        for col in west_idx..east_idx {
            #[allow(clippy::cast_precision_loss)]
            let west = col as f64 * cell_size_deg;
            let bounds = GeoBounds {
                north: south + cell_size_deg,
                south,
                east: west + cell_size_deg,
                west,
            };
            cells.push(GridCell {
                bounds,
                center: LatLng {
                    lat: south + cell_size_deg / 2.0,
                    lng: west + cell_size_deg / 2.0,
                },
                key: cell_key(south, west),
                store_count: 0,
            });
        }
    }

    tracing::debug!(
        rows,
        cols,
        cells = cells.len(),
        cell_size_deg,
        "generated density grid"
    );
    Ok(cells)
}

fn cell_key(south: f64, west: f64) -> String {
    format!("{south:.6},{west:.6}")
}
