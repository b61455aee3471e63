use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use oildash_core::{filter_oils, ChartPair, OilRecord, SliderSpec, Thresholds, REFERENCE_OILS, SLIDERS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::page;

/// Process-owned dashboard state, built once at startup and handed to the
/// handlers explicitly. The dataset is immutable, so requests share it
/// without locking.
pub struct AppState {
    pub dataset: &'static [OilRecord],
    pub sliders: [SliderSpec; 4],
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dataset: REFERENCE_OILS,
            sliders: SLIDERS,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Threshold values as they arrive on the query string. Absent parameters
/// mean "no filter" and fall back to the slider maximum.
#[derive(Debug, Default, Deserialize)]
pub struct ThresholdQuery {
    water: Option<f64>,
    fertilizer: Option<f64>,
    labour: Option<f64>,
    land_use: Option<f64>,
}

impl ThresholdQuery {
    fn resolve(self) -> Thresholds {
        let defaults = Thresholds::default();
        Thresholds {
            water: self.water.unwrap_or(defaults.water),
            fertilizer: self.fertilizer.unwrap_or(defaults.fertilizer),
            labour: self.labour.unwrap_or(defaults.labour),
            land_use: self.land_use.unwrap_or(defaults.land_use),
        }
        .clamped()
    }
}

/// Both charts in one response: the page swaps the pair in a single update,
/// so a stale chart can never sit next to a fresh one.
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub thresholds: Thresholds,
    pub matched: usize,
    #[serde(flatten)]
    pub charts: ChartPair,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .route("/api/sliders", get(sliders))
        .route("/api/charts", get(charts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn dashboard() -> Html<&'static str> {
    Html(page::DASHBOARD_HTML)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn sliders(State(state): State<Arc<AppState>>) -> Json<[SliderSpec; 4]> {
    Json(state.sliders)
}

async fn charts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ThresholdQuery>,
) -> Json<ChartsResponse> {
    let thresholds = query.resolve();
    let rows = filter_oils(state.dataset, &thresholds);
    tracing::debug!(matched = rows.len(), ?thresholds, "recomputed chart pair");

    Json(ChartsResponse {
        thresholds,
        matched: rows.len(),
        charts: ChartPair::from_rows(&rows),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_parameters_resolve_to_maxima() {
        let resolved = ThresholdQuery::default().resolve();
        assert_eq!(resolved, Thresholds::default());
    }

    #[test]
    fn out_of_range_parameters_are_clamped() {
        let query = ThresholdQuery {
            water: Some(1_000_000.0),
            fertilizer: Some(-1.0),
            labour: None,
            land_use: Some(2.5),
        };
        let resolved = query.resolve();
        assert_eq!(resolved.water, 8000.0);
        assert_eq!(resolved.fertilizer, 0.0);
        assert_eq!(resolved.labour, 300.0);
        assert_eq!(resolved.land_use, 2.5);
    }
}
