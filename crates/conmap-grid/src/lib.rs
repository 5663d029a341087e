//! Density grid aggregation for the consumer map.
//!
//! Turns a geographic viewport plus a set of store points into either a
//! circle render list (one marker per store) or a density grid (fixed-size
//! lat/lng cells shaded by per-category store count).

pub mod color;
pub mod count;
pub mod error;
pub mod grid;
pub mod render;

pub use color::density_color;
pub use count::count_stores_in_cell;
pub use error::GridError;
pub use grid::{
    generate_grid, GridCell, LatLng, DEFAULT_CELL_SIZE_DEG, MAX_GRID_CELLS, MIN_CELL_SIZE_DEG,
};
pub use render::{render_plan, CircleMarker, GridLayer, MapSnapshot, RenderMode, RenderPlan, ShadedCell};
