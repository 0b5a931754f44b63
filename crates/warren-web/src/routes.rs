//! HTTP routes.

use crate::{Analysis, WebError, html};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Deserialize;
use std::{fmt, sync::Arc};
use tracing::{info, warn};
use warren_score::BuffettScorer;
use warren_traits::MetricsSource;

/// Shared state: where metrics come from and how they are scored.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn MetricsSource>,
    scorer: Arc<BuffettScorer>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("source", &self.source.name())
            .field("scorer", &self.scorer)
            .finish()
    }
}

impl AppState {
    /// Create state from a metrics source and a scorer.
    #[must_use]
    pub fn new(source: Arc<dyn MetricsSource>, scorer: BuffettScorer) -> Self {
        Self {
            source,
            scorer: Arc::new(scorer),
        }
    }

    /// Fetch, score and explain one ticker as typed by the user.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::NotFound`] for malformed or unknown tickers and
    /// [`WebError::Unavailable`] when the source fails otherwise.
    pub async fn analyze(&self, input: &str) -> Result<Analysis, WebError> {
        match self.source.fetch_symbol(input).await {
            Ok(metrics) => {
                let scored = self.scorer.score(metrics);
                info!(
                    ticker = %scored.ticker(),
                    score = scored.score(),
                    verdict = %scored.verdict(),
                    "Analyzed ticker"
                );
                Ok(Analysis::new(&self.scorer, &scored))
            }
            Err(err) => {
                warn!(input, source = self.source.name(), error = %err, "Analysis failed");
                Err(WebError::from_fetch(input, err))
            }
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Form
        .route("/", get(index))
        .route("/analyze", get(analyze_page))
        // JSON
        .route("/api/analyze/:ticker", get(analyze_api))
        .route("/health", get(health_check))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct AnalyzeQuery {
    #[serde(default)]
    ticker: String,
}

async fn index() -> Html<String> {
    Html(html::index())
}

async fn analyze_page(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
) -> Html<String> {
    match state.analyze(&query.ticker).await {
        Ok(analysis) => Html(html::analysis(&analysis)),
        Err(err) => Html(html::error(&query.ticker, &err.to_string())),
    }
}

async fn analyze_api(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<Analysis>, WebError> {
    state.analyze(&ticker).await.map(Json)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "uncle-warren",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
