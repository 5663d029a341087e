//! Density color scales.
//!
//! Each category has an ordered `(threshold, color)` table with inclusive
//! lower bounds. Scanning from the highest threshold downward and returning
//! on first match implements "count >= largest threshold met" without
//! requiring contiguous or evenly spaced thresholds.

use conmap_core::Category;

/// Food density ramp, faintest to darkest red. Listed highest threshold
/// first, the order the scan walks.
const FOOD_SCALE: [(usize, &str); 4] = [
    (20, "#B71C1C"),
    (10, "#E53935"),
    (5, "#EF9A9A"),
    (0, "#FFEBEE"),
];

/// Lifestyle density ramp, same thresholds, amber hue.
const LIFESTYLE_SCALE: [(usize, &str); 4] = [
    (20, "#FF8F00"),
    (10, "#FFB300"),
    (5, "#FFE082"),
    (0, "#FFF8E1"),
];

/// Map a per-cell store count to a CSS color string for the category's
/// density ramp. The zero tier doubles as the fallback, so every count maps
/// to a color.
#[must_use]
pub fn density_color(category: Category, count: usize) -> &'static str {
    let scale = match category {
        Category::Food => &FOOD_SCALE,
        Category::Lifestyle => &LIFESTYLE_SCALE,
    };
    for &(threshold, color) in scale {
        if count >= threshold {
            return color;
        }
    }
    scale[scale.len() - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_maps_to_faintest_tier() {
        assert_eq!(density_color(Category::Food, 0), "#FFEBEE");
        assert_eq!(density_color(Category::Lifestyle, 0), "#FFF8E1");
    }

    // Category food, count 7: the count >= 5 tier, second color in the ramp.
    #[test]
    fn count_seven_maps_to_five_tier() {
        assert_eq!(density_color(Category::Food, 7), "#EF9A9A");
    }

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        assert_eq!(density_color(Category::Food, 5), "#EF9A9A");
        assert_eq!(density_color(Category::Food, 10), "#E53935");
        assert_eq!(density_color(Category::Food, 20), "#B71C1C");
        assert_eq!(density_color(Category::Food, 500), "#B71C1C");
    }

    #[test]
    fn mapping_is_monotonic_per_category() {
        // Tier index never decreases as the count grows.
        let tier = |count: usize| {
            let color = density_color(Category::Lifestyle, count);
            LIFESTYLE_SCALE
                .iter()
                .rev()
                .position(|(_, c)| *c == color)
                .unwrap()
        };
        let mut last = 0;
        for count in 0..64 {
            let t = tier(count);
            assert!(t >= last, "tier regressed at count {count}");
            last = t;
        }
    }

    #[test]
    fn categories_use_distinct_hues() {
        for count in [0, 5, 10, 20] {
            assert_ne!(
                density_color(Category::Food, count),
                density_color(Category::Lifestyle, count)
            );
        }
    }
}
