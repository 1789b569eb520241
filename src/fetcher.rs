use crate::error::ScoutError;
use crate::parsers::ContentKind;
use crate::store::CandidateDocument;
use crate::utils;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Some suppliers refuse requests without a browser user agent
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP layer of the crawl: content classification probe, PDF retrieval,
/// and page fetches for link extraction.
///
/// Every network, timeout, or status failure is caught at this boundary,
/// logged, and converted into a "no document produced" outcome — nothing
/// here ever aborts the traversal.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a client with the per-request timeout applied to every call
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Lightweight probe: does this URL serve a PDF?
    ///
    /// A `.pdf` path suffix short-circuits without a network round trip;
    /// otherwise a HEAD request decides from the declared content type.
    /// Probe failures classify as "not a PDF", leaving the URL to be
    /// treated as a page.
    pub async fn is_pdf(&self, url: &Url) -> bool {
        if ContentKind::from_url(url) == Some(ContentKind::Pdf) {
            return true;
        }

        match self.client.head(url.as_str()).send().await {
            Ok(response) => matches!(
                declared_content_type(&response).map(|ct| ContentKind::from_content_type(&ct)),
                Some(ContentKind::Pdf)
            ),
            Err(e) => {
                if e.is_timeout() {
                    ::log::warn!("Timeout occurred while checking {}", url);
                } else {
                    ::log::warn!("Error occurred while checking {}: {}", url, e);
                }
                false
            }
        }
    }

    /// Download a PDF payload into `dest_dir`.
    ///
    /// Yields None for non-PDF payloads, non-2xx statuses, timeouts, and
    /// write failures, with a log line for each.
    pub async fn download_pdf(&self, url: &Url, dest_dir: &Path) -> Option<CandidateDocument> {
        match self.try_download(url, dest_dir).await {
            Ok(candidate) => candidate,
            Err(e) => {
                ::log::warn!("An error occurred while downloading {}: {}", url, e);
                None
            }
        }
    }

    async fn try_download(
        &self,
        url: &Url,
        dest_dir: &Path,
    ) -> Result<Option<CandidateDocument>, ScoutError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await?
            .error_for_status()?;

        let is_pdf = matches!(
            declared_content_type(&response).map(|ct| ContentKind::from_content_type(&ct)),
            Some(ContentKind::Pdf)
        );
        if !is_pdf {
            ::log::info!("Skipping {}, not a PDF file", url);
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        let path = dest_dir.join(utils::pdf_file_name(url));
        fs::write(&path, &bytes)?;
        ::log::info!("Downloaded: {}", path.display());

        Ok(Some(CandidateDocument {
            path,
            bytes: bytes.to_vec(),
        }))
    }

    /// Fetch a page body for link extraction; all failures yield None
    pub async fn fetch_page(&self, url: &Url) -> Option<String> {
        match self.try_fetch_page(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                ::log::warn!("An error occurred while scraping links from {}: {}", url, e);
                None
            }
        }
    }

    async fn try_fetch_page(&self, url: &Url) -> Result<String, ScoutError> {
        Ok(self
            .client
            .get(url.as_str())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?)
    }
}

/// Declared Content-Type header value, if readable
fn declared_content_type(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)?
        .to_str()
        .ok()
        .map(|value| value.to_string())
}
