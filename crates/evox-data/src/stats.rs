//! SourceForge download-statistics response model

use serde::Deserialize;

/// Top level of the SourceForge stats response.
///
/// Every layer is optional; a missing layer collapses the count to `0`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub summaries: Option<StatsSummaries>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsSummaries {
    #[serde(default)]
    pub time: Option<TimeSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeSummary {
    #[serde(default)]
    pub downloads: Option<f64>,
}

impl StatsResponse {
    /// Total download count over the summary window, `0` when any layer of
    /// the response is absent. SourceForge reports fractional totals for
    /// some aggregation windows; they are truncated.
    pub fn download_count(&self) -> u64 {
        self.summaries
            .as_ref()
            .and_then(|s| s.time.as_ref())
            .and_then(|t| t.downloads)
            .map(|d| d as u64)
            .unwrap_or(0)
    }
}
