#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// A scratch git repository whose build outcome is recorded in `status.txt`.
pub struct TestRepo {
    temp_dir: TempDir,
}

impl TestRepo {
    /// Creates one commit per entry, oldest first; `true` means the build passes.
    pub fn with_states(states: &[bool]) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let repo_path = temp_dir.path();

        git(repo_path, &["init"]);
        git(repo_path, &["config", "user.name", "Test User"]);
        git(repo_path, &["config", "user.email", "test@example.com"]);
        git(repo_path, &["config", "commit.gpgsign", "false"]);

        for (i, passes) in states.iter().enumerate() {
            let status = if *passes { "good" } else { "bad" };
            fs::write(repo_path.join("status.txt"), format!("{}\n{}\n", status, i)).unwrap();
            git(repo_path, &["add", "."]);
            git(repo_path, &["commit", "-m", &format!("Commit {} ({})", i, status)]);
        }

        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Commit hashes, newest first.
    pub fn hashes(&self) -> Vec<String> {
        let output = Command::new("git")
            .args(["rev-list", "HEAD"])
            .current_dir(self.path())
            .output()
            .unwrap();
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|s| s.to_string())
            .collect()
    }
}

fn git(repo_path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Build command that passes when `status.txt` says "good".
pub fn build_args() -> Vec<String> {
    vec!["-c".to_string(), "grep -q good status.txt".to_string()]
}

/// True when no directory above `path` looks like a repository.
pub fn outside_any_repository(path: &Path) -> bool {
    path.ancestors()
        .all(|dir| lastgreen::vcs::detect_vcs(dir).is_none())
}
