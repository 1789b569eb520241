use crate::error::ScoutError;
use crate::identifier::Identifier;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One located document: a verified or partially-verified candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// CAS number searched for, when the identifier was one
    pub cas: Option<String>,

    /// Substance name searched for, when the identifier was one
    pub name: Option<String>,

    /// Host the document came from
    pub provider: String,

    /// True only for exact verification matches
    pub verified: bool,

    /// Where the document was stored
    pub filepath: String,

    /// The URL the document was downloaded from
    pub url: String,
}

impl ReportEntry {
    pub fn new(
        identifier: &Identifier,
        provider: &str,
        verified: bool,
        filepath: &Path,
        url: &str,
    ) -> Self {
        Self {
            cas: identifier.cas().map(str::to_string),
            name: identifier.name().map(str::to_string),
            provider: provider.to_string(),
            verified,
            filepath: filepath.display().to_string(),
            url: url.to_string(),
        }
    }
}

/// Ordered findings of one scout run, serialized as a JSON array
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persist the findings as a timestamped JSON file under `logs_dir`.
    ///
    /// An empty report writes nothing and returns None — a normal outcome
    /// when no candidate passed verification. Write failures are logged and
    /// also return None.
    pub fn save(&self, logs_dir: &Path) -> Option<PathBuf> {
        if self.entries.is_empty() {
            ::log::info!("No report generated, no documents passed verification");
            return None;
        }

        match self.write(logs_dir) {
            Ok(path) => {
                ::log::info!("Scout report generated, check {}", path.display());
                Some(path)
            }
            Err(e) => {
                ::log::error!("An error occurred while generating the report: {}", e);
                None
            }
        }
    }

    fn write(&self, logs_dir: &Path) -> Result<PathBuf, ScoutError> {
        fs::create_dir_all(logs_dir)?;

        let file_name = format!("{}.json", Local::now().format("%Y-%m-%d_%H-%M-%S"));
        let path = logs_dir.join(file_name);

        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&path, json)?;
        Ok(path)
    }
}
