// src/fs/mod.rs

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod mock;

/// The slice of the filesystem the launcher depends on.
pub trait FileSystem: Send + Sync + Debug {
    /// Absolute path of the process's current working directory.
    fn current_dir(&self) -> Result<PathBuf>;
    fn is_file(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs` / `std::env`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().context("reading current working directory")
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_fs_reports_files_and_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("Target.exe");
        std::fs::write(&file, b"bin").unwrap();

        let fs = RealFileSystem;
        assert!(fs.is_dir(tmp.path()));
        assert!(fs.is_file(&file));
        assert!(!fs.is_dir(&file));
        assert!(!fs.is_file(&tmp.path().join("missing")));
        assert!(fs.current_dir().unwrap().is_absolute());
    }
}
