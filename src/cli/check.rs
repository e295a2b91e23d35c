//! `crategen check`: report whether an artifact is stale.

use anyhow::Result;
use crategen::config::CrategenConfig;
use crategen::generate::is_artifact_valid;
use crategen::log;
use std::path::Path;

/// Check `artifact` (or the configured one). Returns `true` when valid.
pub fn run_check(artifact: Option<&Path>, config: &CrategenConfig) -> Result<bool> {
    let path = match artifact {
        Some(path) => path.to_path_buf(),
        None => config.generate_options().artifact_path()?,
    };

    let valid = is_artifact_valid(&path);
    if valid {
        log!("check"; "{} is up to date", path.display());
    } else if path.is_file() {
        log!("check"; "{} is stale, run `crategen build`", path.display());
    } else {
        log!("check"; "{} does not exist", path.display());
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_reports_staleness() {
        let dir = TempDir::new().unwrap();
        let config = CrategenConfig::default();
        let path = dir.path().join("assets.rs");

        assert!(!run_check(Some(&path), &config).unwrap());

        fs::write(&path, "// 00ff -- DO NOT EDIT THIS LINE\n").unwrap();
        assert!(!run_check(Some(&path), &config).unwrap());
    }
}
