use clap::Parser;
use msds_scout::ScoutConfig;

#[derive(Parser, Debug)]
#[command(name = "msds-scout")]
#[command(about = "Locates and verifies safety data sheets for a chemical identifier")]
#[command(version)]
pub struct Args {
    /// CAS registry number or substance name to search for
    pub identifier: String,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Crawl recursion depth per search result
    #[arg(long)]
    pub depth: Option<u32>,

    /// Maximum number of search results to seed the crawl with
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Maximum number of PDF downloads per seed
    #[arg(long)]
    pub download_limit: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Fold command-line overrides into the loaded configuration
pub fn apply_overrides(mut config: ScoutConfig, args: &Args) -> ScoutConfig {
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(max_results) = args.max_results {
        config.max_search_results = max_results;
    }
    if let Some(download_limit) = args.download_limit {
        config.download_limit = download_limit;
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }
    config
}
