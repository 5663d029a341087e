//! Concurrent per-category fetch orchestration.
//!
//! The two category fetches run concurrently and are joined, so total
//! latency is the max, not the sum, of the two requests. A failed category
//! degrades to zero points without aborting the other, and a generation
//! counter lets callers discard results that finish after a newer fetch has
//! started.

use std::sync::atomic::{AtomicU64, Ordering};

use conmap_core::{Category, CircleStyle, StorePoint};

use crate::client::StoreClient;
use crate::error::ClientError;

/// Which categories to fetch and the circle style to stamp onto each point.
#[derive(Debug, Clone, Default)]
pub struct CategorySelection {
    pub food: Option<CircleStyle>,
    pub lifestyle: Option<CircleStyle>,
}

impl CategorySelection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.food.is_none() && self.lifestyle.is_none()
    }
}

/// Result of one fetch cycle. `stores` replaces the previous set wholesale;
/// `failures` lists categories that errored and were treated as empty.
#[derive(Debug)]
pub struct FetchOutcome {
    pub stores: Vec<StorePoint>,
    pub failures: Vec<(Category, ClientError)>,
}

/// Fetch the selected categories concurrently and merge the results.
///
/// A category that fails is logged at `warn`, reported in
/// [`FetchOutcome::failures`], and contributes no points; the other
/// category's results are kept.
pub async fn fetch_selected(client: &StoreClient, selection: &CategorySelection) -> FetchOutcome {
    let (food, lifestyle) = tokio::join!(
        fetch_one(client, Category::Food, selection.food.as_ref()),
        fetch_one(client, Category::Lifestyle, selection.lifestyle.as_ref()),
    );

    let mut stores = Vec::new();
    let mut failures = Vec::new();
    for outcome in [food, lifestyle] {
        match outcome {
            Some(Ok(points)) => stores.extend(points),
            Some(Err((category, error))) => {
                tracing::warn!(%category, %error, "store fetch failed; treating as empty");
                failures.push((category, error));
            }
            None => {}
        }
    }

    FetchOutcome { stores, failures }
}

type CategoryResult = Option<Result<Vec<StorePoint>, (Category, ClientError)>>;

async fn fetch_one(
    client: &StoreClient,
    category: Category,
    style: Option<&CircleStyle>,
) -> CategoryResult {
    let style = style?;
    let result = client.fetch_category(category).await;
    Some(
        result
            .map(|locations| {
                locations
                    .into_iter()
                    .map(|loc| StorePoint {
                        lat: loc.latitude,
                        lng: loc.longitude,
                        category,
                        color: style.color.clone(),
                        radius_m: style.radius_m,
                    })
                    .collect()
            })
            .map_err(|e| (category, e)),
    )
}

/// Monotonic fetch-generation counter guarding against the stale-response
/// race: a fetch that completes after a newer one has started must not
/// overwrite the newer state.
///
/// Usage: call [`FetchGuard::begin`] before starting a fetch and keep the
/// returned generation; once the fetch resolves, install its results only if
/// [`FetchGuard::is_current`] still holds for that generation.
#[derive(Debug, Default)]
pub struct FetchGuard {
    latest: AtomicU64,
}

impl FetchGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a new fetch and return its generation. Any fetch
    /// begun earlier becomes stale immediately.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the most recently started fetch.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_marks_older_generations_stale() {
        let guard = FetchGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn guard_generations_increase() {
        let guard = FetchGuard::new();
        let a = guard.begin();
        let b = guard.begin();
        assert!(b > a);
    }

    #[test]
    fn empty_selection_is_detected() {
        assert!(CategorySelection::default().is_empty());
        let some = CategorySelection {
            food: Some(CircleStyle {
                color: "#FF0000".to_string(),
                radius_m: 100,
            }),
            lifestyle: None,
        };
        assert!(!some.is_empty());
    }
}
