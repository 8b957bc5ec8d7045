//! Test harness for filetree integration tests

use std::path::Path;
use std::process::Command;

pub use filetree::test_utils::TestDir;

/// Run the filetree binary inside `dir` with plain (uncolored) output.
pub fn run_filetree(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_filetree");
    let output = Command::new(binary)
        .args(["--color", "never"])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run filetree");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
