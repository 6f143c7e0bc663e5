use std::path::{Path, PathBuf};

/// Default data directory (relative to current working directory)
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Subdirectory and file names relative to the data directory
pub const LOGS_DIR: &str = "logs";
pub const PLANS_FILE: &str = "plans.csv";
pub const ZIPS_FILE: &str = "zips.csv";
pub const QUERIES_FILE: &str = "slcsp.csv";

/// Helper struct to manage data paths
#[derive(Clone, Debug)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths instance with the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root data directory
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Get the logs directory
    pub fn logs(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    /// Default location of the plan rate table
    pub fn plans_file(&self) -> PathBuf {
        self.root.join(PLANS_FILE)
    }

    /// Default location of the ZIP-to-rate-area reference table
    pub fn zips_file(&self) -> PathBuf {
        self.root.join(ZIPS_FILE)
    }

    /// Default location of the query ZIP list
    pub fn queries_file(&self) -> PathBuf {
        self.root.join(QUERIES_FILE)
    }

    /// Ensure all directories exist
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.logs())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths_layout() {
        let paths = DataPaths::new("/tmp/slcsp-test");

        assert_eq!(paths.root(), &PathBuf::from("/tmp/slcsp-test"));
        assert_eq!(paths.logs(), PathBuf::from("/tmp/slcsp-test/logs"));
        assert_eq!(paths.plans_file(), PathBuf::from("/tmp/slcsp-test/plans.csv"));
        assert_eq!(paths.zips_file(), PathBuf::from("/tmp/slcsp-test/zips.csv"));
        assert_eq!(
            paths.queries_file(),
            PathBuf::from("/tmp/slcsp-test/slcsp.csv")
        );
    }
}
