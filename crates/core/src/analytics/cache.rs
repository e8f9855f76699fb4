//! Analytics result caching using Moka.
//!
//! Reports are cached per company and dropped whenever one of the company's
//! budgets or its profile changes.

use dashmap::DashMap;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use atrio_shared::types::CompanyId;

use super::types::AnalyticsReport;

/// Default cache capacity (number of companies).
const DEFAULT_CACHE_CAPACITY: u64 = 1_000;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Per-company cache of analytics reports.
#[derive(Clone)]
pub struct AnalyticsCache {
    cache: Cache<CompanyId, Arc<AnalyticsReport>>,
    /// Bumped on every invalidation; a build only lands if it is unchanged.
    generations: Arc<DashMap<CompanyId, u64>>,
}

impl AnalyticsCache {
    /// Creates a cache with default settings: 1000 companies, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom capacity and time-to-live.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            cache,
            generations: Arc::new(DashMap::new()),
        }
    }

    /// Returns the cached report for the company, building it on a miss.
    ///
    /// Cached reports come back with `cached: true`. A report whose build
    /// overlapped an [`invalidate`](Self::invalidate) is returned but not
    /// stored.
    pub fn get_or_build<F>(&self, company_id: CompanyId, build: F) -> AnalyticsReport
    where
        F: FnOnce() -> AnalyticsReport,
    {
        if let Some(hit) = self.cache.get(&company_id) {
            let mut report = (*hit).clone();
            report.cached = true;
            return report;
        }

        let started_at = *self.generations.entry(company_id).or_insert(0);
        let report = build();

        // The read guard holds off `invalidate` until the insert is done.
        if let Some(current) = self.generations.get(&company_id)
            && *current == started_at
        {
            self.cache.insert(company_id, Arc::new(report.clone()));
        }
        report
    }

    /// Drops the company's cached report and discards builds in flight.
    pub fn invalidate(&self, company_id: CompanyId) {
        *self.generations.entry(company_id).or_insert(0) += 1;
        self.cache.invalidate(&company_id);
    }
}

impl Default for AnalyticsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnalyticsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
