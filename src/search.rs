use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// Browser user agent; search engines serve degraded markup to unknown clients
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const BING_ENDPOINT: &str = "https://www.bing.com/search";

/// External search capability: a query in, candidate URLs out.
///
/// Implementations absorb their own failures and return an empty list;
/// an empty result set is a normal outcome, not an error.
#[allow(async_fn_in_trait)]
pub trait SearchProvider {
    /// Return up to `max_results` result URLs for the query
    async fn search(&self, query: &str, max_results: usize) -> Vec<String>;
}

/// Scrapes Bing's HTML results page; no API key required
#[derive(Debug, Clone)]
pub struct BingSearch {
    client: reqwest::Client,
}

impl BingSearch {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// Build the results-page URL for a query
    fn build_query_url(query: &str, max_results: usize) -> String {
        let mut url = Url::parse(BING_ENDPOINT).expect("search endpoint should be a valid URL");
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("count", &max_results.to_string());
        url.to_string()
    }

    /// Pull organic result links out of a results page.
    ///
    /// Organic results sit in `li.b_algo` blocks with the target URL on the
    /// heading anchor; ads and internal navigation never match the selector.
    fn parse_results(html: &str, max_results: usize) -> Vec<String> {
        let doc = Html::parse_document(html);

        let result_selector = Selector::parse("li.b_algo h2 a[href]").unwrap();
        doc.select(&result_selector)
            .filter_map(|e| e.value().attr("href"))
            .filter(|href| href.starts_with("http"))
            .map(|href| href.to_string())
            .take(max_results)
            .collect()
    }
}

impl SearchProvider for BingSearch {
    async fn search(&self, query: &str, max_results: usize) -> Vec<String> {
        ::log::info!("Searching for: {}", query);

        let request_url = Self::build_query_url(query, max_results);
        let response = match self.client.get(&request_url).send().await {
            Ok(response) => response,
            Err(e) => {
                ::log::error!("Search request failed: {}", e);
                return Vec::new();
            }
        };

        let body = match response.error_for_status() {
            Ok(response) => match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    ::log::error!("Failed to read search response: {}", e);
                    return Vec::new();
                }
            },
            Err(e) => {
                ::log::error!("Search returned an error status: {}", e);
                return Vec::new();
            }
        };

        let results = Self::parse_results(&body, max_results);
        ::log::info!("Search returned {} results", results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_url_encodes_the_query() {
        let url = BingSearch::build_query_url("download msds of 106-38-7", 10);

        assert!(url.starts_with("https://www.bing.com/search?"));
        assert!(url.contains("q=download+msds+of+106-38-7"));
        assert!(url.contains("count=10"));
    }

    #[test]
    fn test_parse_results_extracts_organic_links() {
        let html = r#"
            <html><body><ol id="b_results">
                <li class="b_algo">
                    <h2><a href="https://supplier-one.com/sds/106-38-7.pdf">First</a></h2>
                    <p>An SDS result</p>
                </li>
                <li class="b_ad">
                    <h2><a href="https://ads.example.com/buy-now">Sponsored</a></h2>
                </li>
                <li class="b_algo">
                    <h2><a href="https://supplier-two.com/catalog">Second</a></h2>
                </li>
                <li class="b_algo">
                    <h2><a href="javascript:void(0)">Broken</a></h2>
                </li>
            </ol></body></html>
        "#;

        let results = BingSearch::parse_results(html, 10);
        assert_eq!(
            results,
            vec![
                "https://supplier-one.com/sds/106-38-7.pdf".to_string(),
                "https://supplier-two.com/catalog".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_results_honors_the_cap() {
        let html = r#"
            <li class="b_algo"><h2><a href="https://a.com/1">1</a></h2></li>
            <li class="b_algo"><h2><a href="https://a.com/2">2</a></h2></li>
            <li class="b_algo"><h2><a href="https://a.com/3">3</a></h2></li>
        "#;

        let results = BingSearch::parse_results(html, 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_parse_results_of_empty_page() {
        assert!(BingSearch::parse_results("<html></html>", 10).is_empty());
    }
}
