//! Document store collaborator.
//!
//! Maps a markdown filename to its text content, read on demand from the
//! configured docs directory. Absence is a normal condition here, not an
//! error: the registry turns it into a placeholder payload.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

/// Read-on-demand store for the documentation files backing resources.
#[derive(Debug, Clone)]
pub struct DocStore {
    root: PathBuf,
}

impl DocStore {
    /// Create a store rooted at the given docs directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Read a document by filename.
    ///
    /// Returns `None` when the file is missing. An existing but unreadable
    /// file is reported as missing too, after logging the failure.
    pub fn read(&self, filename: &str) -> Option<String> {
        let path = self.root.join(filename);
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("roadmap.md"), "# Roadmap\n").unwrap();

        let store = DocStore::new(dir.path().to_path_buf());
        assert_eq!(store.read("roadmap.md").as_deref(), Some("# Roadmap\n"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = DocStore::new(dir.path().to_path_buf());
        assert!(store.read("does-not-exist.md").is_none());
    }
}
