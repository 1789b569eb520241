// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod identifier;
pub mod ledger;
pub mod parsers;
pub mod results;
pub mod search;
pub mod store;
pub mod utils;
pub mod verify;

// Re-export commonly used types for convenience
pub use config::ScoutConfig;
pub use error::ScoutError;
pub use identifier::Identifier;
pub use results::{Report, ReportEntry};

use crawlers::web::SeedCrawl;
use fetcher::Fetcher;
use filter::DenyList;
use search::{BingSearch, SearchProvider};
use std::path::Path;
use store::FileStore;

/// Top-level pipeline: search for the identifier, crawl each search result
/// as an independent seed, and assemble one report.
pub struct Scout<S = BingSearch> {
    config: ScoutConfig,
    fetcher: Fetcher,
    denylist: DenyList,
    store: FileStore,
    provider: S,
}

impl Scout<BingSearch> {
    /// Build a scout with the default Bing-backed search provider
    pub fn new(config: ScoutConfig) -> Result<Self, ScoutError> {
        let provider = BingSearch::new(config.request_timeout());
        Self::with_provider(config, provider)
    }
}

impl<S: SearchProvider> Scout<S> {
    /// Build a scout with a custom search provider
    pub fn with_provider(config: ScoutConfig, provider: S) -> Result<Self, ScoutError> {
        let fetcher = Fetcher::new(config.request_timeout());
        let denylist = DenyList::new(&config.skip_substrings);
        let store = FileStore::new(
            Path::new(&config.verified_dir),
            Path::new(&config.unverified_dir),
        )?;

        Ok(Self {
            config,
            fetcher,
            denylist,
            store,
            provider,
        })
    }

    /// Run the full pipeline for one identifier.
    ///
    /// Every search-result seed gets a fresh visit ledger and download
    /// budget, so seeds neither share visit history nor compete for
    /// downloads. All failures inside a seed's traversal are absorbed
    /// where they occur; the run always completes and returns a (possibly
    /// empty) report, persisted under the logs directory when non-empty.
    pub async fn run(&self, identifier: &Identifier) -> Report {
        let query = format!("download msds of {}", identifier.value());
        let seeds = self
            .provider
            .search(&query, self.config.max_search_results)
            .await;

        let mut report = Report::new();
        for seed in seeds {
            ::log::info!("Search result: {}", seed);
            let mut sub_crawl = SeedCrawl::new(
                &self.config,
                &self.fetcher,
                &self.denylist,
                &self.store,
                identifier,
                &mut report,
            );
            sub_crawl.run(&seed, self.config.depth).await;
        }

        report.save(Path::new(&self.config.logs_dir));
        report
    }
}
