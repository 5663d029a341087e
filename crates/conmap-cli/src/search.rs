//! The `search` command: city suggestions from the static lookup table.

use anyhow::Context;

use conmap_core::{load_cities, search_cities, AppConfig, City};

pub(crate) fn run(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let cities = load_cities(&config.cities_path).with_context(|| {
        format!(
            "failed to load cities file {}",
            config.cities_path.display()
        )
    })?;

    let matches = search_cities(&cities, query);
    print!("{}", suggestions(&matches));
    Ok(())
}

fn suggestions(matches: &[&City]) -> String {
    use std::fmt::Write;

    if matches.is_empty() {
        return "no matching cities\n".to_string();
    }

    let mut out = String::new();
    for city in matches {
        let target = city.recenter_target();
        let _ = writeln!(
            out,
            "{}  ({:.4}, {:.4})  zoom {}",
            city.display_name(),
            target.lat,
            target.lng,
            target.zoom
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_format_name_and_target() {
        let mumbai = City {
            cityname: "\"Mumbai\"".to_string(),
            lat: 19.076,
            long: 72.8777,
        };
        let out = suggestions(&[&mumbai]);
        assert_eq!(out, "Mumbai  (19.0760, 72.8777)  zoom 12\n");
    }

    #[test]
    fn no_matches_message() {
        assert_eq!(suggestions(&[]), "no matching cities\n");
    }
}
