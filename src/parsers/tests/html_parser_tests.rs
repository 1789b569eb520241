use crate::parsers::html;
use url::Url;

fn base() -> Url {
    Url::parse("https://supplier.example.com").unwrap()
}

#[test]
fn test_links_come_back_in_document_order() {
    let page = r#"
        <html><body>
            <a href="https://supplier.example.com/catalog">Catalog</a>
            <a href="https://supplier.example.com/sds/106-38-7.pdf">SDS</a>
            <a href="https://other.example.org/page">Elsewhere</a>
        </body></html>
    "#;

    let links = html::parse_links(page, &base());
    assert_eq!(
        links,
        vec![
            "https://supplier.example.com/catalog".to_string(),
            "https://supplier.example.com/sds/106-38-7.pdf".to_string(),
            "https://other.example.org/page".to_string(),
        ]
    );
}

#[test]
fn test_relative_links_resolve_against_the_base() {
    let page = r#"
        <a href="/sds/106-38-7.pdf">Absolute path</a>
        <a href="docs/sheet.pdf">Relative path</a>
    "#;

    let links = html::parse_links(page, &base());
    assert_eq!(
        links,
        vec![
            "https://supplier.example.com/sds/106-38-7.pdf".to_string(),
            "https://supplier.example.com/docs/sheet.pdf".to_string(),
        ]
    );
}

#[test]
fn test_absolute_links_pass_through_untouched() {
    let page = r#"<a href="http://mirror.example.net/sds.pdf">Mirror</a>"#;

    let links = html::parse_links(page, &base());
    assert_eq!(links, vec!["http://mirror.example.net/sds.pdf".to_string()]);
}

#[test]
fn test_duplicates_are_kept() {
    // Deduplication is the visit ledger's job, not the parser's
    let page = r#"
        <a href="/sds.pdf">One</a>
        <a href="/sds.pdf">Two</a>
    "#;

    let links = html::parse_links(page, &base());
    assert_eq!(links.len(), 2);
}

#[test]
fn test_anchors_without_href_are_ignored() {
    let page = r#"
        <a name="section-1">Anchor target</a>
        <a href="/real">Real link</a>
    "#;

    let links = html::parse_links(page, &base());
    assert_eq!(links, vec!["https://supplier.example.com/real".to_string()]);
}

#[test]
fn test_pages_without_links_yield_nothing() {
    assert!(html::parse_links("<html><body><p>No links here</p></body></html>", &base()).is_empty());
    assert!(html::parse_links("", &base()).is_empty());
}

#[test]
fn test_malformed_markup_is_tolerated() {
    let page = r#"<a href="/ok">Unclosed <div><a href="/also-ok">Still parsed"#;

    let links = html::parse_links(page, &base());
    assert_eq!(
        links,
        vec![
            "https://supplier.example.com/ok".to_string(),
            "https://supplier.example.com/also-ok".to_string(),
        ]
    );
}
