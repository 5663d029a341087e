//! Static city lookup table backing the search-as-you-type box.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Maximum number of suggestions returned by [`search_cities`].
const MAX_SUGGESTIONS: usize = 5;

/// Zoom level applied when the map recenters on a selected city.
const CITY_ZOOM: u8 = 12;

/// A city lookup entry. Field names follow the upstream data file, where the
/// city name may carry embedded double quotes and longitude is `long`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub cityname: String,
    pub lat: f64,
    pub long: f64,
}

impl City {
    /// City name with any embedded double quotes stripped, as shown in the UI.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.cityname.replace('"', "")
    }

    /// Where the map should pan when this city is selected.
    #[must_use]
    pub fn recenter_target(&self) -> RecenterTarget {
        RecenterTarget {
            lat: self.lat,
            lng: self.long,
            zoom: CITY_ZOOM,
        }
    }
}

/// Pan/zoom target produced by selecting a city suggestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecenterTarget {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
}

#[derive(Debug, Deserialize)]
pub struct CitiesFile {
    pub cities: Vec<City>,
}

/// Load and validate the city lookup table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty names, out-of-range coordinates, duplicate names).
pub fn load_cities(path: &Path) -> Result<Vec<City>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CitiesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CitiesFile = serde_yaml::from_str(&content)?;
    validate_cities(&file.cities)?;
    Ok(file.cities)
}

fn validate_cities(cities: &[City]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for city in cities {
        let name = city.display_name();
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "city name must be non-empty".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&city.lat) {
            return Err(ConfigError::Validation(format!(
                "city '{name}' has latitude {} outside [-90, 90]",
                city.lat
            )));
        }
        if !(-180.0..=180.0).contains(&city.long) {
            return Err(ConfigError::Validation(format!(
                "city '{name}' has longitude {} outside [-180, 180]",
                city.long
            )));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate city name: '{name}'"
            )));
        }
    }

    Ok(())
}

/// Case-insensitive substring search over the quote-stripped city names,
/// capped at 5 results in file order. Blank queries match nothing.
#[must_use]
pub fn search_cities<'a>(cities: &'a [City], query: &str) -> Vec<&'a City> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    cities
        .iter()
        .filter(|c| c.display_name().to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}
