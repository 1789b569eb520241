/// Destinations that never host authoritative safety data sheets: social
/// networks, news outlets, search portals, marketplaces, health and
/// government portals, education sites, generic account/legal pages, and
/// aggregator chemical sites that gate their documents.
const SKIP_SUBSTRINGS: &[&str] = &[
    "guidechem",
    "chemicalbook",
    "commonchemistry",
    "alpha-chemistry",
    "lookchem",
    "home",
    "pharmaffiliates",
    "benjaminmoore.com",
    "wikipedia",
    "imdb",
    "amazon",
    "ebay",
    "craigslist",
    "pinterest",
    "instagram",
    "tumblr",
    "reddit",
    "snapchat",
    "tiktok",
    "linkedin",
    "twitter",
    "x.com",
    "facebook",
    "youtube",
    "nytimes",
    "huffingtonpost",
    "forbes",
    "bloomberg",
    "bbc",
    "cnn",
    "foxnews",
    "nbcnews",
    "abcnews",
    "theguardian",
    "dailymail",
    "usatoday",
    "quora",
    "stackexchange",
    "stackoverflow",
    "tripadvisor",
    "yelp",
    "zomato",
    "opentable",
    "healthline",
    "webmd",
    "mayoclinic",
    "nih.gov",
    "cdc.gov",
    "fda.gov",
    "epa.gov",
    "google",
    "bing",
    "yahoo",
    "ask",
    "aol",
    "baidu",
    "msn",
    "duckduckgo",
    "yandex",
    "coursera",
    "udemy",
    "edx",
    "khanacademy",
    "scribd",
    "login",
    "register",
    "signup",
    "signin",
    "faq",
    "terms",
    "conditions",
    "terms-of-service",
    "support",
    "help",
    "contact",
    "about",
    "my-account",
    "favourites",
    "bulkOrder",
    "cart",
    "privacy",
    "food",
];

/// Substring denylist deciding which URLs are not worth visiting at all.
///
/// Checked before any network access for a candidate URL so known-irrelevant
/// destinations never consume the visit or download budgets.
#[derive(Debug)]
pub struct DenyList {
    entries: Vec<String>,
}

impl Default for DenyList {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl DenyList {
    /// Build the denylist from the built-in set plus extra entries
    pub fn new(extra: &[String]) -> Self {
        let mut entries: Vec<String> = SKIP_SUBSTRINGS
            .iter()
            .map(|entry| entry.to_lowercase())
            .collect();
        entries.extend(extra.iter().map(|entry| entry.to_lowercase()));

        Self { entries }
    }

    /// True if the lowercased URL contains any denylisted substring
    pub fn should_skip(&self, url: &str) -> bool {
        let lowered = url.to_lowercase();
        self.entries.iter().any(|entry| lowered.contains(entry))
    }
}
