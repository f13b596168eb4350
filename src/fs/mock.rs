// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEntry {
    File,
    Dir,
}

/// In-memory filesystem with a configurable current directory.
///
/// Clones share the same state, so a test can hand one clone to the launcher
/// and keep another to mutate or inspect.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
    cwd: Arc<Mutex<Option<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `cwd` as the current directory (created as a dir entry).
    pub fn with_current_dir(cwd: impl AsRef<Path>) -> Self {
        let fs = Self::new();
        fs.set_current_dir(cwd);
        fs
    }

    pub fn set_current_dir(&self, cwd: impl AsRef<Path>) {
        let cwd = cwd.as_ref().to_path_buf();
        self.add_dir(&cwd);
        *self.cwd.lock().unwrap() = Some(cwd);
    }

    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries.lock().unwrap();
        if let Some(parent) = path.parent() {
            Self::ensure_dirs(&mut entries, parent);
        }
        entries.insert(path, MockEntry::File);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut entries = self.entries.lock().unwrap();
        Self::ensure_dirs(&mut entries, path.as_ref());
    }

    fn ensure_dirs(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            entries
                .entry(ancestor.to_path_buf())
                .or_insert(MockEntry::Dir);
        }
    }
}

impl FileSystem for MockFileSystem {
    fn current_dir(&self) -> Result<PathBuf> {
        self.cwd
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow!("no current directory configured in mock filesystem"))
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.entries.lock().unwrap().get(path), Some(MockEntry::File))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.entries.lock().unwrap().get(path), Some(MockEntry::Dir))
    }
}
