#![allow(dead_code)]

pub use erewhon_test_utils::builders;
pub use erewhon_test_utils::fake_spawner::FakeSpawner;
pub use erewhon_test_utils::scripted_dialog::ScriptedDialog;
pub use erewhon_test_utils::{init_tracing, with_timeout};

use erewhon_installer::fs::mock::MockFileSystem;

/// Mock filesystem rooted at `cwd` with `<cwd>/<subdir>/<exe>` installed.
pub fn installed_fs(cwd: &str, subdir: &str, exe: &str) -> MockFileSystem {
    let fs = MockFileSystem::with_current_dir(cwd);
    fs.add_file(format!("{cwd}/{subdir}/{exe}"));
    fs
}
