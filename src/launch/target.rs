// src/launch/target.rs

use std::path::{Path, PathBuf};

use crate::config::LaunchLayout;
use crate::errors::{LauncherError, Result};
use crate::fs::FileSystem;

/// The installed application, located relative to a base directory captured
/// once at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    base_dir: PathBuf,
    layout: LaunchLayout,
}

impl LaunchTarget {
    /// Capture the current working directory and resolve `layout` under it.
    pub fn capture(fs: &dyn FileSystem, layout: &LaunchLayout) -> Result<Self> {
        let base_dir = fs.current_dir().map_err(LauncherError::WorkingDir)?;
        Self::from_base(base_dir, layout)
    }

    /// Resolve `layout` under an explicit base directory.
    pub fn from_base(base_dir: impl Into<PathBuf>, layout: &LaunchLayout) -> Result<Self> {
        let base_dir = base_dir.into();
        if !base_dir.is_absolute() {
            return Err(LauncherError::WorkingDir(anyhow::anyhow!(
                "base directory {} is not absolute",
                base_dir.display()
            )));
        }
        Ok(Self {
            base_dir,
            layout: layout.clone(),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `base/<subdir>`: the child's working directory.
    pub fn working_dir(&self) -> PathBuf {
        self.base_dir.join(&self.layout.subdir)
    }

    /// `base/<subdir>/<executable>`.
    pub fn executable_path(&self) -> PathBuf {
        self.working_dir().join(&self.layout.executable)
    }

    /// Build the one-shot spawn request for this target.
    pub fn into_descriptor(self) -> ChildProcessDescriptor {
        ChildProcessDescriptor {
            program: self.executable_path(),
            working_dir: self.working_dir(),
        }
    }
}

/// Everything a spawn request carries: no arguments, no environment
/// overrides, no stream redirection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildProcessDescriptor {
    pub program: PathBuf,
    pub working_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    #[test]
    fn resolves_under_captured_cwd() {
        let fs = MockFileSystem::with_current_dir("/opt/app");
        let target = LaunchTarget::capture(&fs, &LaunchLayout::default()).unwrap();

        assert_eq!(target.base_dir(), Path::new("/opt/app"));
        assert_eq!(target.working_dir(), PathBuf::from("/opt/app/Utopia"));
        assert_eq!(
            target.executable_path(),
            PathBuf::from("/opt/app/Utopia/ErewhonClient.exe")
        );
    }

    #[test]
    fn base_is_captured_once() {
        let fs = MockFileSystem::with_current_dir("/opt/app");
        let target = LaunchTarget::capture(&fs, &LaunchLayout::default()).unwrap();

        fs.set_current_dir("/somewhere/else");
        let desc = target.into_descriptor();
        assert_eq!(desc.working_dir, PathBuf::from("/opt/app/Utopia"));
        assert_eq!(desc.program.parent(), Some(desc.working_dir.as_path()));
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = LaunchTarget::from_base("relative/dir", &LaunchLayout::default()).unwrap_err();
        assert!(matches!(err, LauncherError::WorkingDir(_)));
    }

    #[cfg(windows)]
    #[test]
    fn rooted_path_without_drive_is_rejected() {
        let err = LaunchTarget::from_base(r"\foo", &LaunchLayout::default()).unwrap_err();
        assert!(matches!(err, LauncherError::WorkingDir(_)));
    }

    #[test]
    fn unreadable_cwd_is_a_working_dir_error() {
        let fs = MockFileSystem::new();
        let err = LaunchTarget::capture(&fs, &LaunchLayout::default()).unwrap_err();
        assert!(matches!(err, LauncherError::WorkingDir(_)));
    }
}
