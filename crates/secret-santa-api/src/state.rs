//! Shared application state.

use std::sync::Arc;

use secret_santa_core::seed::SeedSource;
use url::Url;

/// Application state shared across all request handlers.
///
/// Draws are replayed from their seed on every request, so nothing about a
/// draw is kept here.
#[derive(Clone)]
pub struct AppState {
    /// Picks seeds for draws that do not supply one.
    pub seed_source: Arc<dyn SeedSource>,
    /// Base URL that generated share and reveal links point at.
    pub public_base_url: Url,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(seed_source: Arc<dyn SeedSource>, public_base_url: Url) -> Self {
        Self {
            seed_source,
            public_base_url,
        }
    }
}
