use crate::error::ScoutError;

/// Identification content sits on the first pages of a safety data sheet;
/// parsing beyond them is wasted work on large documents.
const MAX_PAGES: usize = 5;

/// Extracts plain text from the first few pages of a PDF payload.
///
/// Corrupt, encrypted, or structurally unsupported documents yield None
/// and a log line, never an error to the caller.
pub fn extract_text(bytes: &[u8]) -> Option<String> {
    match leading_pages(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            ::log::warn!("An error occurred while extracting text from PDF: {}", e);
            None
        }
    }
}

/// Concatenate the text of at most the first MAX_PAGES pages
fn leading_pages(bytes: &[u8]) -> Result<String, ScoutError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ScoutError::PdfParse(e.to_string()))?;

    Ok(pages
        .iter()
        .take(MAX_PAGES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n"))
}
