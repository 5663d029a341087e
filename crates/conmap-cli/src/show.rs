//! The `show` command: fetch selected categories, derive a render plan,
//! print it.

use anyhow::Context;

use conmap_client::{fetch_selected, CategorySelection, FetchGuard, FetchOutcome, StoreClient};
use conmap_core::{AppConfig, GeoBounds};
use conmap_grid::{render_plan, GridLayer, MapSnapshot, RenderMode, RenderPlan};

/// How many non-empty cells to list per grid layer.
const TOP_CELLS: usize = 10;

pub(crate) async fn run(
    config: &AppConfig,
    food: bool,
    lifestyle: bool,
    mode: RenderMode,
    viewport: GeoBounds,
) -> anyhow::Result<()> {
    let selection = CategorySelection {
        food: food.then(|| config.food_style.clone()),
        lifestyle: lifestyle.then(|| config.lifestyle_style.clone()),
    };
    if selection.is_empty() {
        anyhow::bail!("select at least one category (--food and/or --lifestyle)");
    }

    let client = StoreClient::new(
        &config.api_base_url,
        &config.api_token,
        config.request_timeout_secs,
    )
    .context("failed to build store API client")?;

    // One-shot command, but the install path still goes through the guard so
    // a stale fetch can never overwrite a newer one.
    let guard = FetchGuard::new();
    let generation = guard.begin();
    let outcome = fetch_selected(&client, &selection).await;
    if !guard.is_current(generation) {
        tracing::info!(generation, "discarding stale fetch result");
        return Ok(());
    }

    let snapshot = MapSnapshot::new(viewport, config.cell_size_deg)
        .with_stores(outcome.stores.clone())
        .with_mode(mode);
    let plan = render_plan(&snapshot).context("failed to derive render plan")?;

    print!("{}", render_summary(&plan, &outcome));
    Ok(())
}

fn render_summary(plan: &RenderPlan, outcome: &FetchOutcome) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (category, error) in &outcome.failures {
        let _ = writeln!(out, "  ! {category} fetch failed: {error}");
    }

    match plan {
        RenderPlan::Circles(markers) => {
            let _ = writeln!(out, "{} circle(s):", markers.len());
            for marker in markers {
                let _ = writeln!(
                    out,
                    "  \u{2713} ({:.4}, {:.4})  {}  r={}m",
                    marker.lat, marker.lng, marker.color, marker.radius_m
                );
            }
        }
        RenderPlan::Grid(layers) => {
            for layer in layers {
                let _ = write!(out, "{}", layer_summary(layer));
            }
            if layers.is_empty() {
                let _ = writeln!(out, "no store data to aggregate");
            }
        }
    }
    out
}

fn layer_summary(layer: &GridLayer) -> String {
    use std::fmt::Write;

    let occupied = layer
        .cells
        .iter()
        .filter(|c| c.cell.store_count > 0)
        .count();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} cell(s), {} occupied",
        layer.category,
        layer.cells.len(),
        occupied
    );

    let mut busiest: Vec<_> = layer
        .cells
        .iter()
        .filter(|c| c.cell.store_count > 0)
        .collect();
    busiest.sort_by(|a, b| b.cell.store_count.cmp(&a.cell.store_count));
    for shaded in busiest.into_iter().take(TOP_CELLS) {
        let _ = writeln!(
            out,
            "  \u{2713} {}  {:>4} store(s)  {}",
            shaded.cell.key, shaded.cell.store_count, shaded.color
        );
    }
    out
}
