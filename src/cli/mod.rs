pub mod catalog;
pub mod compose;
pub mod last;
pub mod lint;
pub mod parse;

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::config::Config;
use crate::store::LastPromptStore;

/// Read prompt text from a file, or from stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    let file = Path::new(path);
    if !file.exists() {
        bail!("File not found: {}", path);
    }
    if !file.is_file() {
        bail!("Path is not a file: {}", path);
    }
    Ok(fs::read_to_string(file)?)
}

pub(crate) fn last_prompt_store(config: &Config) -> LastPromptStore {
    LastPromptStore::new(config.storage.resolve_last_prompt_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_file_not_found() {
        let result = read_input("/tmp/nonexistent-prompt-file-xyz.txt");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("File not found"));
    }

    #[test]
    fn test_read_input_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = read_input(dir.path().to_str().unwrap());
        assert!(result.unwrap_err().to_string().contains("not a file"));
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        std::fs::write(&path, "You are a tester.").unwrap();
        assert_eq!(read_input(path.to_str().unwrap()).unwrap(), "You are a tester.");
    }
}
