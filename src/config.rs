//! Optional dataset-location configuration.
//!
//! A YAML file may override where the three datasets live. Explicit CLI flags
//! still win over the file; the data-directory defaults apply last.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// YAML-backed override for the dataset file locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Plan rate table
    pub plans_file: Option<PathBuf>,

    /// ZIP-to-rate-area reference table
    pub zips_file: Option<PathBuf>,

    /// Query ZIP list
    pub queries_file: Option<PathBuf>,
}

impl SourcesConfig {
    /// Load a sources config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_has_no_overrides() {
        let config = SourcesConfig::default();

        assert!(config.plans_file.is_none());
        assert!(config.zips_file.is_none());
        assert!(config.queries_file.is_none());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "plans_file: /data/2024/plans.csv").unwrap();
        writeln!(file, "zips_file: /data/2024/zips.csv").unwrap();

        let config = SourcesConfig::load(&path).unwrap();

        assert_eq!(
            config.plans_file,
            Some(PathBuf::from("/data/2024/plans.csv"))
        );
        assert_eq!(config.zips_file, Some(PathBuf::from("/data/2024/zips.csv")));
        assert!(config.queries_file.is_none());
    }

    #[test]
    fn test_load_missing_file_names_the_path() {
        let err = SourcesConfig::load("/nonexistent/sources.yaml").unwrap_err();

        assert!(err.to_string().contains("/nonexistent/sources.yaml"));
    }
}
