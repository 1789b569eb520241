use crate::identifier::Identifier;
use crate::verify::Verdict;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A downloaded candidate awaiting verification: its temporary location in
/// the unverified area plus the raw payload for text extraction
#[derive(Debug)]
pub struct CandidateDocument {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Outcome of placing a candidate into permanent storage
#[derive(Debug, PartialEq, Eq)]
pub enum Placement {
    /// Moved into the verified area at this path
    Verified(PathBuf),
    /// Left in the unverified area at this path
    Unverified(PathBuf),
    /// Deleted, or lost to a filesystem failure
    Discarded,
}

/// Segregated storage areas for verified and unverified documents
#[derive(Debug, Clone)]
pub struct FileStore {
    verified_dir: PathBuf,
    unverified_dir: PathBuf,
}

impl FileStore {
    /// Create the store, ensuring both directories exist
    pub fn new<P: AsRef<Path>>(verified_dir: P, unverified_dir: P) -> io::Result<Self> {
        let verified_dir = verified_dir.as_ref().to_path_buf();
        let unverified_dir = unverified_dir.as_ref().to_path_buf();
        fs::create_dir_all(&verified_dir)?;
        fs::create_dir_all(&unverified_dir)?;

        Ok(Self {
            verified_dir,
            unverified_dir,
        })
    }

    /// Download destination for fresh candidates
    pub fn unverified_dir(&self) -> &Path {
        &self.unverified_dir
    }

    /// Move, keep, or delete a candidate according to its verdict.
    ///
    /// Exact matches move into the verified area under a collision-safe
    /// `{identifier}_{provider}.pdf` name; similar matches stay where they
    /// were downloaded; everything else is deleted. Filesystem failures are
    /// logged and reported as Discarded — the run continues either way.
    pub fn place(
        &self,
        candidate: CandidateDocument,
        verdict: Verdict,
        identifier: &Identifier,
        provider: &str,
    ) -> Placement {
        match verdict {
            Verdict::Exact => {
                let destination = self.unique_destination(identifier, provider);
                match fs::rename(&candidate.path, &destination) {
                    Ok(()) => Placement::Verified(destination),
                    Err(e) => {
                        ::log::error!(
                            "An error occurred while renaming and moving file {}: {}",
                            candidate.path.display(),
                            e
                        );
                        Placement::Discarded
                    }
                }
            }
            Verdict::Similar => Placement::Unverified(candidate.path),
            Verdict::NoMatch => {
                if let Err(e) = fs::remove_file(&candidate.path) {
                    ::log::warn!(
                        "Failed to delete rejected file {}: {}",
                        candidate.path.display(),
                        e
                    );
                }
                Placement::Discarded
            }
        }
    }

    /// First free `{identifier}_{provider}.pdf` path in the verified area,
    /// suffixing `_1`, `_2`, … until a free name is found
    fn unique_destination(&self, identifier: &Identifier, provider: &str) -> PathBuf {
        let stem = crate::utils::sanitize_file_name(&format!("{}_{}", identifier.value(), provider));
        let mut destination = self.verified_dir.join(format!("{}.pdf", stem));

        let mut counter = 1;
        while destination.exists() {
            destination = self.verified_dir.join(format!("{}_{}.pdf", stem, counter));
            counter += 1;
        }
        destination
    }
}
