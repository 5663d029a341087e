//! Geographic domain types shared across the workspace.

use serde::{Deserialize, Serialize};

/// The two store classifications the map distinguishes. Each drives its own
/// fetch endpoint, circle style, and density color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Lifestyle,
}

impl Category {
    /// Path segment used in the store API URL (`/api/{segment}/all`).
    #[must_use]
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Lifestyle => "lifestyle",
        }
    }

    #[must_use]
    pub fn all() -> [Category; 2] {
        [Category::Food, Category::Lifestyle]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.endpoint_path())
    }
}

/// A geographic bounding box in degrees. No antimeridian wraparound handling:
/// `east` must be numerically greater than (or equal to) `west`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    /// Check that the bounds are not inverted. A degenerate box
    /// (`north == south` or `east == west`) is allowed; it represents a
    /// single point or line and still maps to at least one grid cell.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.north >= self.south && self.east >= self.west
    }

    /// Whether a point lies within the box, inclusive on all four edges.
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }
}

/// Per-category circle rendering parameters, sourced from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    /// CSS color string, e.g. `#FF0000`.
    pub color: String,
    /// Circle radius in meters.
    pub radius_m: u32,
}

/// A single store location tagged with its category and display style.
///
/// Immutable once fetched; the full set is replaced wholesale on each show
/// action rather than merged incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct StorePoint {
    pub lat: f64,
    pub lng: f64,
    pub category: Category,
    pub color: String,
    pub radius_m: u32,
}
