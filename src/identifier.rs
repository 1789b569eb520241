use crate::error::ScoutError;
use regex::Regex;

/// CAS registry numbers: 2-7 digits, 2 digits, one check digit.
const CAS_PATTERN: &str = r"^\d{2,7}-\d{2}-\d$";

/// The chemical being scouted: a CAS registry number or a substance name.
///
/// Fixed for the lifetime of a crawl run; drives both content verification
/// and the naming of stored files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// CAS registry number, e.g. "106-38-7"
    Cas(String),
    /// Free-text substance name, e.g. "Benzene, 1-bromo-4-methyl-"
    Name(String),
}

impl Identifier {
    /// Classify raw input as a CAS number or a substance name.
    pub fn parse(input: &str) -> Result<Self, ScoutError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ScoutError::EmptyIdentifier);
        }

        let cas = Regex::new(CAS_PATTERN).expect("CAS pattern should be valid");
        if cas.is_match(trimmed) {
            Ok(Identifier::Cas(trimmed.to_string()))
        } else {
            Ok(Identifier::Name(trimmed.to_string()))
        }
    }

    /// The raw identifier string, whichever kind it is.
    pub fn value(&self) -> &str {
        match self {
            Identifier::Cas(value) | Identifier::Name(value) => value,
        }
    }

    /// The CAS number, if this identifier is one.
    pub fn cas(&self) -> Option<&str> {
        match self {
            Identifier::Cas(value) => Some(value),
            Identifier::Name(_) => None,
        }
    }

    /// The substance name, if this identifier is one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Identifier::Cas(_) => None,
            Identifier::Name(value) => Some(value),
        }
    }
}
