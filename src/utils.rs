use url::Url;

/// Convert a string to a sanitized file name
pub fn sanitize_file_name(name: &str) -> String {
    let mut sanitized = name.replace(['/', '\\', ':', '?', '&', '=', '#', '%'], "_");

    // Limit file name length
    if sanitized.len() > 100 {
        sanitized.truncate(100);
    }
    sanitized
}

/// Derive a local file name for a downloaded document from its URL.
///
/// Takes the last non-empty path segment, sanitizes it, and enforces a
/// `.pdf` suffix; URLs with no usable segment fall back to "document.pdf".
pub fn pdf_file_name(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
        .unwrap_or("document");

    let mut name = sanitize_file_name(segment);
    if name.is_empty() {
        name = "document".to_string();
    }
    if !name.to_lowercase().ends_with(".pdf") {
        name.push_str(".pdf");
    }
    name
}

/// Host of the seed's base URL, used as the provider label in reports
/// and stored-file names
pub fn provider_host(base: &Url) -> String {
    base.host_str().unwrap_or("unknown").to_string()
}
