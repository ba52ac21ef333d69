//! Wiring from configuration to a running search domain.

pub mod console;
pub mod runtime;

use std::sync::Arc;

use anyhow::{Context, Result};
use marquee_config::Config;

use crate::domains::search::SearchDomain;
use crate::infra::ApiClient;
use crate::infra::cache::{DiskRecentStore, MemoryRecentStore, RecentStore};

pub use runtime::SearchRuntime;

/// Build the search domain described by `config`.
pub fn build_domain(config: &Config) -> Result<SearchDomain> {
    let client =
        ApiClient::with_timeout(config.server_url(), config.server.request_timeout)
            .context("Failed to build API client")?;

    let domain = SearchDomain::new(Arc::new(client), recent_store(config))
        .with_scroll_threshold(config.search.scroll_threshold_px);
    Ok(domain)
}

/// Pick where the recent list lives. Falls back to memory when no data
/// directory can be resolved.
pub fn recent_store(config: &Config) -> Arc<dyn RecentStore> {
    if !config.recent.persist {
        log::info!("[Recent] persistence disabled; keeping recent items in memory");
        return Arc::new(MemoryRecentStore::new());
    }

    if let Some(path) = &config.recent.path {
        return Arc::new(DiskRecentStore::new(path.clone()));
    }

    match DiskRecentStore::try_new_for_server(config.server_url()) {
        Ok(store) => {
            log::debug!("[Recent] using {}", store.path().display());
            Arc::new(store)
        }
        Err(err) => {
            log::warn!("[Recent] falling back to memory store: {}", err);
            Arc::new(MemoryRecentStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_model::ItemSuggestion;

    #[test]
    fn disabled_persistence_uses_memory() {
        let mut config = Config::with_defaults().expect("defaults");
        config.recent.persist = false;

        let store = recent_store(&config);
        store.save(&[ItemSuggestion::new(1, "Alien")]).expect("save");
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn explicit_path_is_used() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("recent.json");
        let mut config = Config::with_defaults().expect("defaults");
        config.recent.path = Some(path.clone());

        recent_store(&config)
            .save(&[ItemSuggestion::new(2, "Brazil")])
            .expect("save");

        assert!(path.exists());
    }

    #[test]
    fn domain_picks_up_threshold() {
        let mut config = Config::with_defaults().expect("defaults");
        config.recent.persist = false;
        config.search.scroll_threshold_px = 64.0;

        let domain = build_domain(&config).expect("domain");

        assert_eq!(domain.state.scroll_threshold_px, 64.0);
        assert_eq!(domain.service.base_url(), "http://localhost:8080");
    }
}
