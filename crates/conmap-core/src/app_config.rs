use std::path::PathBuf;

use crate::geo::CircleStyle;

#[derive(Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_token: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Grid cell edge length in degrees (~1 km at the equator at the 0.009
    /// default; the approximation degrades toward the poles).
    pub cell_size_deg: f64,
    pub cities_path: PathBuf,
    pub food_style: CircleStyle,
    pub lifestyle_style: CircleStyle,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("api_token", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("cell_size_deg", &self.cell_size_deg)
            .field("cities_path", &self.cities_path)
            .field("food_style", &self.food_style)
            .field("lifestyle_style", &self.lifestyle_style)
            .finish()
    }
}
