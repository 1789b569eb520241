use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for a scout run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Maximum visits to any single URL within one seed's sub-crawl
    #[serde(default = "default_max_url_visits")]
    pub max_url_visits: u32,

    /// Maximum visits to any single domain within one seed's sub-crawl
    #[serde(default = "default_max_domain_visits")]
    pub max_domain_visits: u32,

    /// Maximum successful PDF downloads per seed's sub-crawl
    #[serde(default = "default_download_limit")]
    pub download_limit: u32,

    /// Crawl recursion depth from each search-result seed
    #[serde(default = "default_depth")]
    pub depth: u32,

    /// Maximum number of search results used to seed sub-crawls
    #[serde(default = "default_max_search_results")]
    pub max_search_results: usize,

    /// Per-request timeout in seconds for every network call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Directory receiving documents that verified as exact matches
    #[serde(default = "default_verified_dir")]
    pub verified_dir: String,

    /// Directory receiving downloads awaiting or failing full verification
    #[serde(default = "default_unverified_dir")]
    pub unverified_dir: String,

    /// Directory receiving timestamped run reports
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,

    /// Extra denylist substrings applied on top of the built-in set
    #[serde(default)]
    pub skip_substrings: Vec<String>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            max_url_visits: default_max_url_visits(),
            max_domain_visits: default_max_domain_visits(),
            download_limit: default_download_limit(),
            depth: default_depth(),
            max_search_results: default_max_search_results(),
            request_timeout_secs: default_request_timeout_secs(),
            verified_dir: default_verified_dir(),
            unverified_dir: default_unverified_dir(),
            logs_dir: default_logs_dir(),
            skip_substrings: Vec::new(),
        }
    }
}

impl ScoutConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Per-request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Default value for max_url_visits
fn default_max_url_visits() -> u32 {
    5
}

/// Default value for max_domain_visits
fn default_max_domain_visits() -> u32 {
    10
}

/// Default value for download_limit
fn default_download_limit() -> u32 {
    5
}

/// Default crawl depth per seed
fn default_depth() -> u32 {
    2
}

/// Default number of search results to process
fn default_max_search_results() -> usize {
    10
}

/// Default per-request timeout in seconds
fn default_request_timeout_secs() -> u64 {
    10
}

/// Default directory for verified documents
fn default_verified_dir() -> String {
    "verified".to_string()
}

/// Default directory for unverified downloads
fn default_unverified_dir() -> String {
    "unverified".to_string()
}

/// Default directory for run reports
fn default_logs_dir() -> String {
    "logs".to_string()
}
