// ============================================================================
// STATS VIEWMODEL - Spending chart panel
// ============================================================================
// Fetched independently of the record list with the same filter. Only the
// response for the latest request is kept.
// ============================================================================

use crate::error::ApiError;
use crate::models::StatsSummary;

#[derive(Clone, Debug, Default)]
pub struct StatsViewModel {
    summary: Option<StatsSummary>,
    loading: bool,
    generation: u64,
}

impl StatsViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the panel; responses to earlier requests are dropped
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self::new();
        self.generation = generation;
    }

    pub fn summary(&self) -> Option<&StatsSummary> {
        self.summary.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Returns false for a stale response
    pub fn apply(&mut self, ticket: u64, result: Result<StatsSummary, ApiError>) -> bool {
        if ticket != self.generation {
            log::debug!("[STATS] Stale stats response #{} dropped", ticket);
            return false;
        }
        self.loading = false;
        self.summary = match result {
            Ok(summary) => Some(summary),
            Err(e) => {
                log::error!("❌ [STATS] Failed to fetch stats: {}", e);
                None
            }
        };
        true
    }

    /// The panel shows while loading and when there is spending to chart
    pub fn is_visible(&self) -> bool {
        self.loading || self.summary.as_ref().is_some_and(|s| !s.is_empty())
    }
}
