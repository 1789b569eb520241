use crate::config::ScoutConfig;
use crate::fetcher::Fetcher;
use crate::filter::DenyList;
use crate::identifier::Identifier;
use crate::ledger::{DownloadBudget, VisitLedger};
use crate::parsers;
use crate::results::{Report, ReportEntry};
use crate::store::{FileStore, Placement};
use crate::utils;
use crate::verify;
use url::Url;

/// Recursive crawl of one search-result seed.
///
/// Owns the seed's visit ledger and download budget — both are created
/// fresh per seed, so different seeds neither share visit history nor
/// compete for downloads. Sibling links are processed sequentially, one
/// branch completing in full before the next begins, which means the
/// download budget is spent first-discovered, first-served. Every failure
/// inside the traversal is absorbed where it occurs; one bad branch never
/// takes down the rest of the tree.
pub struct SeedCrawl<'a> {
    fetcher: &'a Fetcher,
    denylist: &'a DenyList,
    store: &'a FileStore,
    identifier: &'a Identifier,
    report: &'a mut Report,
    ledger: VisitLedger,
    budget: DownloadBudget,
}

impl<'a> SeedCrawl<'a> {
    pub fn new(
        config: &ScoutConfig,
        fetcher: &'a Fetcher,
        denylist: &'a DenyList,
        store: &'a FileStore,
        identifier: &'a Identifier,
        report: &'a mut Report,
    ) -> Self {
        Self {
            fetcher,
            denylist,
            store,
            identifier,
            report,
            ledger: VisitLedger::new(config.max_url_visits, config.max_domain_visits),
            budget: DownloadBudget::new(config.download_limit),
        }
    }

    /// Crawl outward from the seed to the given depth
    pub async fn run(&mut self, seed_url: &str, depth: u32) {
        self.crawl(seed_url.to_string(), depth, None).await;
    }

    /// One traversal step.
    ///
    /// Checks run in fixed order: depth and download budget, denylist,
    /// URL validity, then the visit ledger — which records the visit
    /// before anything else happens, so link cycles stay bounded. Only
    /// then does the classification probe touch the network. PDFs are
    /// terminal: download, verify, place. Pages expand into child steps
    /// at `depth - 1` under the same seed base.
    async fn crawl(&mut self, url: String, depth: u32, base: Option<Url>) {
        if depth == 0 || self.budget.exhausted() {
            return;
        }
        if self.denylist.should_skip(&url) {
            ::log::info!("Skipped: {}", url);
            return;
        }

        let Ok(parsed) = Url::parse(&url) else {
            ::log::debug!("Skipped unparsable URL: {}", url);
            return;
        };
        let Some(domain) = parsed.host_str().map(str::to_string) else {
            ::log::debug!("Skipped URL without a host: {}", url);
            return;
        };

        if !self.ledger.try_visit(&url, &domain) {
            return;
        }

        // The seed's origin anchors relative links for the whole branch
        let base = match base {
            Some(base) => base,
            None => {
                let Some(origin) = origin_of(&parsed) else {
                    ::log::debug!("Skipped URL without an origin: {}", url);
                    return;
                };
                origin
            }
        };

        if self.fetcher.is_pdf(&parsed).await {
            self.process_document(&parsed, &base).await;
        } else {
            self.expand_page(&parsed, &base, depth).await;
        }
    }

    /// Terminal step: fetch the candidate, verify it, and place it
    async fn process_document(&mut self, url: &Url, base: &Url) {
        let Some(candidate) = self
            .fetcher
            .download_pdf(url, self.store.unverified_dir())
            .await
        else {
            return;
        };
        self.budget.try_consume();

        let text = parsers::pdf::extract_text(&candidate.bytes);
        let verdict = verify::verify(text.as_deref(), self.identifier);
        let provider = utils::provider_host(base);

        match self.store.place(candidate, verdict, self.identifier, &provider) {
            Placement::Verified(path) => {
                ::log::info!("{} is probably the required MSDS", path.display());
                self.report.push(ReportEntry::new(
                    self.identifier,
                    &provider,
                    true,
                    &path,
                    url.as_str(),
                ));
            }
            Placement::Unverified(path) => {
                ::log::info!("{} may be the required MSDS", path.display());
                self.report.push(ReportEntry::new(
                    self.identifier,
                    &provider,
                    false,
                    &path,
                    url.as_str(),
                ));
            }
            Placement::Discarded => {
                ::log::info!("{} is not the required MSDS", url);
            }
        }
    }

    /// Expansion step: mine the page for links and recurse on each
    async fn expand_page(&mut self, url: &Url, base: &Url, depth: u32) {
        let Some(body) = self.fetcher.fetch_page(url).await else {
            return;
        };

        let links = parsers::html::parse_links(&body, base);
        for link in links {
            Box::pin(self.crawl(link, depth - 1, Some(base.clone()))).await;
        }
    }
}

/// Scheme+host origin of a URL
fn origin_of(url: &Url) -> Option<Url> {
    let host = url.host_str()?;
    Url::parse(&format!("{}://{}", url.scheme(), host)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        config: ScoutConfig,
        fetcher: Fetcher,
        denylist: DenyList,
        store: FileStore,
        identifier: Identifier,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let config = ScoutConfig::default();
            let fetcher = Fetcher::new(Duration::from_secs(1));
            let denylist = DenyList::default();
            let store =
                FileStore::new(dir.path().join("verified"), dir.path().join("unverified"))
                    .unwrap();
            let identifier = Identifier::Cas("106-38-7".to_string());

            Self {
                _dir: dir,
                config,
                fetcher,
                denylist,
                store,
                identifier,
            }
        }

        fn crawl<'a>(&'a self, report: &'a mut Report) -> SeedCrawl<'a> {
            SeedCrawl::new(
                &self.config,
                &self.fetcher,
                &self.denylist,
                &self.store,
                &self.identifier,
                report,
            )
        }
    }

    // The assertions below exercise only branches that terminate before
    // the classification probe, so no test touches the network.

    #[tokio::test]
    async fn test_depth_zero_terminates_immediately() {
        let fixture = Fixture::new();
        let mut report = Report::new();

        fixture
            .crawl(&mut report)
            .run("https://supplier.example.com/sds.pdf", 0)
            .await;

        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_denylisted_seed_is_skipped() {
        let fixture = Fixture::new();
        let mut report = Report::new();

        fixture
            .crawl(&mut report)
            .run("https://en.wikipedia.org/wiki/Toluene", 2)
            .await;

        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_exhausted_budget_halts_traversal() {
        let fixture = Fixture::new();
        let mut report = Report::new();

        let mut crawl = fixture.crawl(&mut report);
        crawl.budget = DownloadBudget::new(0);
        crawl.run("https://supplier.example.com/sds.pdf", 2).await;

        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_unparsable_url_is_skipped() {
        let fixture = Fixture::new();
        let mut report = Report::new();

        fixture.crawl(&mut report).run("not a url at all", 2).await;

        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_hostless_url_is_skipped() {
        let fixture = Fixture::new();
        let mut report = Report::new();

        fixture.crawl(&mut report).run("data:text/plain,hello", 2).await;

        assert!(report.is_empty());
    }

    #[test]
    fn test_origin_of_strips_path_and_query() {
        let url = Url::parse("https://supplier.example.com/catalog/item?id=3").unwrap();
        let origin = origin_of(&url).unwrap();
        assert_eq!(origin.as_str(), "https://supplier.example.com/");
    }
}
