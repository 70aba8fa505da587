use anyhow::{bail, Result};

use crate::cli::read_input;
use crate::config::Config;
use crate::lint::{LintSummary, PromptLinter};

pub fn run(input: &str, json: bool, config_path: Option<String>) -> Result<()> {
    let config = Config::load_with_path(config_path)?;
    let text = read_input(input)?;

    let linter = PromptLinter::from_config(&config.lint)?;
    let (results, summary) = linter.analyze_with_summary(&text);

    if json {
        let out = serde_json::json!({ "results": results, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        linter.print_report(&results);
    }

    check_summary(&summary)
}

/// Only error-status checks fail the command; warnings are advisory.
fn check_summary(summary: &LintSummary) -> Result<()> {
    if summary.errors > 0 {
        bail!("{} lint error(s) found", summary.errors);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    /// Empty config in `dir`, so runs use built-in lint settings no matter
    /// what prompt-companion.toml the working directory or user has.
    fn default_config(dir: &Path) -> Option<String> {
        let path = dir.join("config.toml");
        std::fs::write(&path, "").unwrap();
        Some(path.to_str().unwrap().to_string())
    }

    #[test]
    fn test_run_file_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nonexistent-prompt.txt");
        let result = run(missing.to_str().unwrap(), false, default_config(dir.path()));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("File not found"));
    }

    #[test]
    fn test_run_missing_role_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        std::fs::write(&path, "Summarize this article as a bullet list.").unwrap();

        let result = run(path.to_str().unwrap(), false, default_config(dir.path()));
        assert!(result.unwrap_err().to_string().contains("1 lint error(s)"));
    }

    #[test]
    fn test_run_warnings_only_passes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        std::fs::write(&path, "You are a poet.").unwrap();

        assert!(run(path.to_str().unwrap(), true, default_config(dir.path())).is_ok());
    }

    #[test]
    fn test_empty_config_file_uses_builtin_lint_settings() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = default_config(dir.path()).unwrap();
        let config = Config::load_with_path(Some(config_path)).unwrap();
        assert_eq!(config.lint.min_length, crate::lint::MIN_PROMPT_LENGTH);
        assert_eq!(config.lint.role_marker, crate::lint::ROLE_MARKER);
    }

    #[test]
    fn test_run_with_custom_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("custom.toml");
        std::fs::write(&config_path, "[lint]\nrole_marker = \"act as\"\n").unwrap();
        let prompt_path = dir.path().join("prompt.txt");
        std::fs::write(&prompt_path, "Act as a reviewer and list issues.").unwrap();

        let result = run(
            prompt_path.to_str().unwrap(),
            false,
            Some(config_path.to_str().unwrap().to_string()),
        );
        assert!(result.is_ok());
    }
}
