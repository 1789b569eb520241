use scraper::{Html, Selector};
use url::Url;

/// Parses an HTML payload and yields absolute outbound link URLs.
///
/// Each `href` is resolved against `base` — the scheme+host origin of the
/// seed — so relative links land on the seed's site while absolute links
/// pass through untouched. Order follows the document; duplicates are kept
/// (revisits are bounded by the visit ledger, not here).
pub fn parse_links(html: &str, base: &Url) -> Vec<String> {
    let doc = Html::parse_document(html);

    let link_selector = Selector::parse("a[href]").unwrap();
    let links = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .map(|resolved| resolved.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("HTML parser found {} links", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).collect::<Vec<_>>()
        );
    }

    links
}
