pub mod html;
pub mod pdf;

#[cfg(test)]
mod tests;

use url::Url;

/// Payload classes the crawler distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// A candidate document to download and verify
    Pdf,
    /// A page to mine for further links
    Html,
}

impl ContentKind {
    /// Classify from the URL path alone; None when the path is not
    /// conclusive and a network probe is needed
    pub fn from_url(url: &Url) -> Option<Self> {
        if url.path().to_lowercase().ends_with(".pdf") {
            ::log::debug!("Classifying as PDF: {}", url);
            return Some(ContentKind::Pdf);
        }
        None
    }

    /// Classify from a declared Content-Type header value
    pub fn from_content_type(value: &str) -> Self {
        if value.trim().to_lowercase().starts_with("application/pdf") {
            ContentKind::Pdf
        } else {
            ContentKind::Html
        }
    }
}
