use crate::identifier::Identifier;
use regex::Regex;

/// Marker phrase every safety data sheet carries on its identification pages
const SDS_PHRASE: &str = "safety data sheet";

/// Outcome of matching a document's text against the identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The identifier and the marker phrase both appear
    Exact,
    /// The marker phrase and at least one token of the substance name appear
    Similar,
    /// Neither rule matched, or no text could be extracted
    NoMatch,
}

/// Classify extracted document text against the identifier.
///
/// A CAS number can only verify exactly; partial token matches are
/// meaningless for a registry identifier.
pub fn verify(text: Option<&str>, identifier: &Identifier) -> Verdict {
    let Some(text) = text else {
        return Verdict::NoMatch;
    };
    let Some(ident_pattern) = word_pattern(identifier.value()) else {
        return Verdict::NoMatch;
    };
    let Some(sds_pattern) = word_pattern(SDS_PHRASE) else {
        return Verdict::NoMatch;
    };

    if !sds_pattern.is_match(text) {
        return Verdict::NoMatch;
    }
    if ident_pattern.is_match(text) {
        return Verdict::Exact;
    }

    if let Identifier::Name(name) = identifier {
        if let Some(tokens) = token_pattern(name) {
            if tokens.is_match(text) {
                return Verdict::Similar;
            }
        }
    }

    Verdict::NoMatch
}

/// Case-insensitive, word-boundary-anchored pattern for a sequence
fn word_pattern(sequence: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(sequence))).ok()
}

/// Pattern matching any single whitespace-delimited token of a name,
/// case-insensitive and deliberately not boundary-anchored
fn token_pattern(name: &str) -> Option<Regex> {
    let alternation = name
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    if alternation.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", alternation)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cas(value: &str) -> Identifier {
        Identifier::Cas(value.to_string())
    }

    fn name(value: &str) -> Identifier {
        Identifier::Name(value.to_string())
    }

    #[test]
    fn test_cas_exact_match() {
        let text = "SECTION 1\nSafety Data Sheet\nCAS No. 106-38-7\np-Bromotoluene";
        assert_eq!(verify(Some(text), &cas("106-38-7")), Verdict::Exact);
    }

    #[test]
    fn test_cas_never_similar() {
        // The registry number is absent; a partial digit overlap means nothing
        let text = "Safety Data Sheet for CAS 106-42-3";
        assert_eq!(verify(Some(text), &cas("106-38-7")), Verdict::NoMatch);
    }

    #[test]
    fn test_name_exact_match() {
        let text = "Safety Data Sheet\nProduct: toluene, technical grade";
        assert_eq!(verify(Some(text), &name("toluene")), Verdict::Exact);
    }

    #[test]
    fn test_name_token_match_is_similar() {
        let text = "Safety Data Sheet\nProduct name: Benzene, technical mixture";
        assert_eq!(
            verify(Some(text), &name("Benzene, 1-bromo-4-methyl-")),
            Verdict::Similar
        );
    }

    #[test]
    fn test_marker_phrase_is_required() {
        let text = "Product brochure for 106-38-7, a fine chemical";
        assert_eq!(verify(Some(text), &cas("106-38-7")), Verdict::NoMatch);

        let text = "Technical bulletin mentioning Benzene only";
        assert_eq!(verify(Some(text), &name("Benzene")), Verdict::NoMatch);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let text = "SAFETY DATA SHEET\nproduct: TOLUENE";
        assert_eq!(verify(Some(text), &name("Toluene")), Verdict::Exact);
    }

    #[test]
    fn test_identifier_must_sit_on_word_boundaries() {
        // Embedded in a longer number the CAS does not count as exact
        let text = "Safety Data Sheet ref 9106-38-71";
        assert_eq!(verify(Some(text), &cas("106-38-7")), Verdict::NoMatch);
    }

    #[test]
    fn test_missing_text_is_no_match() {
        assert_eq!(verify(None, &cas("106-38-7")), Verdict::NoMatch);
        assert_eq!(verify(None, &name("Benzene")), Verdict::NoMatch);
    }
}
