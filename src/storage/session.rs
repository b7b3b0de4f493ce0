//! The working set of an editing session
//!
//! A [`Session`] owns the current [`ShelterDirectory`], remembers which file
//! it came from and tracks whether it has unsaved changes. Callers create
//! one and pass it where it is needed.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::record_file::{self, RecordFileError};
use crate::domain::ShelterDirectory;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid filename")]
    InvalidFilename,

    #[error(transparent)]
    File(#[from] RecordFileError),
}

#[derive(Debug, Default)]
pub struct Session {
    directory: ShelterDirectory,
    filename: Option<PathBuf>,
    changed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the directory with the contents of `path`
    ///
    /// Any read or parse failure is reported as "Unable to load file." and
    /// leaves the current directory in place.
    pub fn load(&mut self, path: &Path) -> Result<(), SessionError> {
        self.set_filename(path)?;

        let directory = record_file::decode(path).map_err(|_| RecordFileError::Load)?;

        tracing::info!(
            "Loaded {} shelters from {}",
            directory.len(),
            path.display()
        );
        self.directory = directory;
        self.changed = false;
        Ok(())
    }

    /// Writes the directory to `path` and makes it the current file
    pub fn save(&mut self, path: &Path) -> Result<(), SessionError> {
        self.set_filename(path)?;

        record_file::encode(&self.directory, path)?;

        tracing::info!(
            "Saved {} shelters to {}",
            self.directory.len(),
            path.display()
        );
        self.changed = false;
        Ok(())
    }

    pub fn directory(&self) -> &ShelterDirectory {
        &self.directory
    }

    /// Mutable access to the directory; marks the session changed
    pub fn directory_mut(&mut self) -> &mut ShelterDirectory {
        self.changed = true;
        &mut self.directory
    }

    pub fn replace_directory(&mut self, directory: ShelterDirectory) {
        self.directory = directory;
        self.changed = true;
    }

    /// Starts over with an empty directory
    pub fn new_list(&mut self) {
        self.directory = ShelterDirectory::new();
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Sets the current file, trimming surrounding whitespace
    pub fn set_filename(&mut self, path: &Path) -> Result<(), SessionError> {
        let raw = path.to_string_lossy();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SessionError::InvalidFilename);
        }

        self.filename = Some(if trimmed.len() == raw.len() {
            path.to_path_buf()
        } else {
            PathBuf::from(trimmed)
        });
        Ok(())
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn set_changed(&mut self, changed: bool) {
        self.changed = changed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const RECORDS: &str = "# NCSU Rescue\n* Dog,Jack,3/9/2001,LARGE,true,true,6/1/2001,POINTER_GERMAN_SHORTHAIRED,NOTES\n- Jack,3/9/2001\n\n";

    #[test]
    fn load_replaces_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.md");
        fs::write(&path, RECORDS).unwrap();

        let mut session = Session::new();
        session.directory_mut().add_named("Stale").unwrap();
        assert!(session.is_changed());

        session.load(&path).unwrap();
        assert!(!session.is_changed());
        assert_eq!(session.filename(), Some(path.as_path()));
        assert_eq!(session.directory().len(), 1);
        assert!(session.directory().find("NCSU Rescue").is_some());
    }

    #[test]
    fn every_load_failure_is_unable_to_load() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.md");
        fs::write(&bad, "\n# A\n").unwrap();

        let mut session = Session::new();
        session.directory_mut().add_named("Kept").unwrap();

        for path in [bad, dir.path().join("missing.md")] {
            let err = session.load(&path).unwrap_err();
            assert_eq!(err, SessionError::File(RecordFileError::Load));
            assert_eq!(err.to_string(), "Unable to load file.");
        }
        assert!(session.directory().find("Kept").is_some());
    }

    #[test]
    fn save_clears_changed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.md");

        let mut session = Session::new();
        session.directory_mut().add_named("Alpha").unwrap();
        session.save(&path).unwrap();

        assert!(!session.is_changed());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Alpha\n\n\n\n");
    }

    #[test]
    fn save_failure_keeps_changed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.md");

        let mut session = Session::new();
        session.directory_mut().add_named("Alpha").unwrap();
        let err = session.save(&path).unwrap_err();

        assert_eq!(err.to_string(), "Unable to save file.");
        assert!(session.is_changed());
    }

    #[test]
    fn blank_filename_rejected() {
        let mut session = Session::new();
        assert_eq!(
            session.set_filename(Path::new("   ")),
            Err(SessionError::InvalidFilename)
        );
        assert_eq!(session.load(Path::new("")), Err(SessionError::InvalidFilename));

        session.set_filename(Path::new("  records.md ")).unwrap();
        assert_eq!(session.filename(), Some(Path::new("records.md")));
    }

    #[test]
    fn replace_and_new_list() {
        let mut session = Session::new();
        let mut directory = ShelterDirectory::new();
        directory.add_named("Beta").unwrap();

        session.replace_directory(directory);
        assert!(session.is_changed());
        assert_eq!(session.directory().len(), 1);

        session.set_changed(false);
        session.new_list();
        assert!(session.directory().is_empty());
    }
}
