//! Viewport/render-state orchestration.
//!
//! The map's UI state is held as an immutable [`MapSnapshot`]; every change
//! (pan/zoom, new store set, mode toggle) produces a new snapshot, and the
//! render list is derived from the snapshot by the pure [`render_plan`]
//! function. There is no diffing between old and new grids — each derivation
//! is a full recompute, and no fetch side effects can hide in rendering
//! because the derivation only reads the store set the snapshot already
//! holds.

use conmap_core::{Category, GeoBounds, StorePoint};

use crate::color::density_color;
use crate::count::count_stores_in_cell;
use crate::error::GridError;
use crate::grid::{generate_grid, GridCell};

/// The two mutually exclusive rendering modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One marker per store, sized and colored by its configured style.
    Circles,
    /// Aggregated density cells.
    Grid,
}

/// Immutable snapshot of everything the renderer needs. Transitions return
/// a new snapshot; the previous one is simply dropped.
#[derive(Debug, Clone)]
pub struct MapSnapshot {
    pub viewport: GeoBounds,
    pub stores: Vec<StorePoint>,
    pub mode: RenderMode,
    pub cell_size_deg: f64,
}

impl MapSnapshot {
    #[must_use]
    pub fn new(viewport: GeoBounds, cell_size_deg: f64) -> Self {
        Self {
            viewport,
            stores: Vec::new(),
            mode: RenderMode::Circles,
            cell_size_deg,
        }
    }

    /// Pan/zoom: same stores, new visible bounds.
    #[must_use]
    pub fn with_viewport(&self, viewport: GeoBounds) -> Self {
        Self {
            viewport,
            ..self.clone()
        }
    }

    /// A fetch completed: the store set is replaced wholesale, never merged.
    #[must_use]
    pub fn with_stores(&self, stores: Vec<StorePoint>) -> Self {
        Self {
            stores,
            ..self.clone()
        }
    }

    /// Toggle circle/grid mode. Re-derives from the held store set only;
    /// no refetch is needed or possible from here.
    #[must_use]
    pub fn with_mode(&self, mode: RenderMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }
}

/// One circle to draw in circle mode.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    pub lat: f64,
    pub lng: f64,
    pub color: String,
    pub radius_m: u32,
}

/// A grid cell annotated with its density color, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadedCell {
    pub cell: GridCell,
    pub color: &'static str,
}

/// The full density grid for one category. Categories get independent
/// layers so each can use its own color ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayer {
    pub category: Category,
    pub cells: Vec<ShadedCell>,
}

/// What the map surface should draw for a given snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    Circles(Vec<CircleMarker>),
    Grid(Vec<GridLayer>),
}

/// Derive the render list for a snapshot. Pure: reads only the snapshot,
/// performs no I/O, and recomputes everything from scratch.
///
/// # Errors
///
/// Grid mode propagates [`GridError`] from grid generation; circle mode
/// cannot fail.
pub fn render_plan(snapshot: &MapSnapshot) -> Result<RenderPlan, GridError> {
    match snapshot.mode {
        RenderMode::Circles => Ok(RenderPlan::Circles(
            snapshot
                .stores
                .iter()
                .map(|s| CircleMarker {
                    lat: s.lat,
                    lng: s.lng,
                    color: s.color.clone(),
                    radius_m: s.radius_m,
                })
                .collect(),
        )),
        RenderMode::Grid => {
            let grid = generate_grid(&snapshot.viewport, snapshot.cell_size_deg)?;
            let layers = Category::all()
                .into_iter()
                .filter(|cat| snapshot.stores.iter().any(|s| s.category == *cat))
                .map(|cat| shade_layer(cat, &grid, &snapshot.stores))
                .collect();
            Ok(RenderPlan::Grid(layers))
        }
    }
}

fn shade_layer(category: Category, grid: &[GridCell], stores: &[StorePoint]) -> GridLayer {
    let of_category: Vec<StorePoint> = stores
        .iter()
        .filter(|s| s.category == category)
        .cloned()
        .collect();

    let cells = grid
        .iter()
        .map(|cell| {
            let count = count_stores_in_cell(&cell.bounds, &of_category);
            ShadedCell {
                cell: GridCell {
                    store_count: count,
                    ..cell.clone()
                },
                color: density_color(category, count),
            }
        })
        .collect();

    GridLayer { category, cells }
}
