use std::collections::HashMap;

/// Per-sub-crawl visit counters for exact URLs and for domains.
///
/// Counts only ever grow within a sub-crawl; a fresh ledger is created for
/// every search-result seed, so visits are not deduplicated across seeds.
#[derive(Debug)]
pub struct VisitLedger {
    url_visits: HashMap<String, u32>,
    domain_visits: HashMap<String, u32>,
    max_url_visits: u32,
    max_domain_visits: u32,
}

impl VisitLedger {
    pub fn new(max_url_visits: u32, max_domain_visits: u32) -> Self {
        Self {
            url_visits: HashMap::new(),
            domain_visits: HashMap::new(),
            max_url_visits,
            max_domain_visits,
        }
    }

    /// Record a visit to the URL and its domain.
    ///
    /// Returns false without recording when either cap is already reached;
    /// on allow, both counters increment before any recursion from the URL,
    /// so link-graph cycles cannot revisit without bound.
    pub fn try_visit(&mut self, url: &str, domain: &str) -> bool {
        if self.domain_visits.get(domain).copied().unwrap_or(0) >= self.max_domain_visits {
            ::log::info!(
                "Skipped: {}, domain {} visited more than {} times",
                url,
                domain,
                self.max_domain_visits
            );
            return false;
        }

        if self.url_visits.get(url).copied().unwrap_or(0) >= self.max_url_visits {
            ::log::info!(
                "Skipped: {}, URL visited more than {} times",
                url,
                self.max_url_visits
            );
            return false;
        }

        *self.url_visits.entry(url.to_string()).or_insert(0) += 1;
        *self.domain_visits.entry(domain.to_string()).or_insert(0) += 1;
        true
    }
}

/// Cap on successful downloads within one seed's sub-crawl
#[derive(Debug)]
pub struct DownloadBudget {
    count: u32,
    limit: u32,
}

impl DownloadBudget {
    pub fn new(limit: u32) -> Self {
        Self { count: 0, limit }
    }

    /// True once the cap is reached; checked at the top of every
    /// traversal step, not only at download time
    pub fn exhausted(&self) -> bool {
        self.count >= self.limit
    }

    /// Consume one unit of the budget; false when the cap is reached
    pub fn try_consume(&mut self) -> bool {
        if self.exhausted() {
            return false;
        }
        self.count += 1;
        true
    }

    /// Units consumed so far
    pub fn used(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_visit_cap() {
        let mut ledger = VisitLedger::new(5, 100);

        for _ in 0..5 {
            assert!(ledger.try_visit("https://example.com/a", "example.com"));
        }
        assert!(!ledger.try_visit("https://example.com/a", "example.com"));
    }

    #[test]
    fn test_domain_visit_cap_across_distinct_urls() {
        let mut ledger = VisitLedger::new(5, 3);

        assert!(ledger.try_visit("https://example.com/a", "example.com"));
        assert!(ledger.try_visit("https://example.com/b", "example.com"));
        assert!(ledger.try_visit("https://example.com/c", "example.com"));
        assert!(!ledger.try_visit("https://example.com/d", "example.com"));

        // Other domains are unaffected
        assert!(ledger.try_visit("https://other.com/a", "other.com"));
    }

    #[test]
    fn test_denied_visit_does_not_increment() {
        let mut ledger = VisitLedger::new(1, 1);

        assert!(ledger.try_visit("https://example.com/a", "example.com"));
        // Denied by the domain cap, repeatedly, without disturbing state
        for _ in 0..3 {
            assert!(!ledger.try_visit("https://example.com/b", "example.com"));
        }
    }

    #[test]
    fn test_download_budget_caps_consumption() {
        let mut budget = DownloadBudget::new(5);

        for _ in 0..5 {
            assert!(!budget.exhausted());
            assert!(budget.try_consume());
        }
        assert!(budget.exhausted());
        assert!(!budget.try_consume());
        assert_eq!(budget.used(), 5);
    }

    #[test]
    fn test_zero_budget_starts_exhausted() {
        let mut budget = DownloadBudget::new(0);

        assert!(budget.exhausted());
        assert!(!budget.try_consume());
    }
}
