// tests/binary_exit.rs

use std::process::Command;

fn launcher_in(dir: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_erewhon-installer"))
        .args(args)
        .current_dir(dir)
        .env_remove("EREWHON_LOG")
        .output()
        .expect("running erewhon-installer")
}

#[test]
fn missing_install_reports_once_and_exits_with_failure() {
    let tmp = tempfile::tempdir().unwrap();

    let out = launcher_in(tmp.path(), &["--unattended"]);
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    let diagnostics: Vec<&str> = stderr
        .lines()
        .filter(|l| l.starts_with("erewhon-installer error:"))
        .collect();
    assert_eq!(diagnostics.len(), 1, "stderr was:\n{stderr}");

    let line = diagnostics[0];
    assert!(line.contains("Launch failed"));
    assert!(line.contains("Utopia"));
    assert_eq!(line.matches("does not exist").count(), 1, "cause repeated: {line}");
}

#[test]
fn dry_run_prints_target_and_succeeds() {
    let tmp = tempfile::tempdir().unwrap();

    let out = launcher_in(tmp.path(), &["--dry-run"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("ErewhonClient.exe"));
    assert!(stdout.contains("program present = false"));
}
