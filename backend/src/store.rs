//! Publish-once holder of the loaded portfolio.
//!
//! The portfolio is built before the server accepts requests. Handlers take
//! an `Arc` snapshot and render from it without holding the lock; the lock
//! is only written by an explicit [`PortfolioStore::reload`].

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::api::logs::{log_error, log_success};
use crate::error::LoadResult;
use crate::models::Portfolio;
use crate::transform::pipeline::{load_portfolio, LoadReport};

pub struct PortfolioStore {
    data_path: PathBuf,
    current: RwLock<Arc<Portfolio>>,
}

impl PortfolioStore {
    /// Load the dataset; fails if the portfolio cannot be built.
    pub fn load(data_path: impl AsRef<Path>) -> LoadResult<Self> {
        let data_path = data_path.as_ref().to_path_buf();
        let report = load_portfolio(&data_path)?;
        Ok(Self::with_portfolio(data_path, report.portfolio))
    }

    /// Wrap an already built portfolio.
    pub fn with_portfolio(data_path: impl Into<PathBuf>, portfolio: Portfolio) -> Self {
        Self {
            data_path: data_path.into(),
            current: RwLock::new(Arc::new(portfolio)),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Current portfolio.
    pub fn snapshot(&self) -> Arc<Portfolio> {
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Rebuild from the dataset. On failure the previous portfolio stays published.
    pub fn reload(&self) -> LoadResult<LoadReport> {
        match load_portfolio(&self.data_path) {
            Ok(report) => {
                let fresh = Arc::new(report.portfolio.clone());
                let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
                *guard = fresh;
                log_success("Portfolio reloaded");
                Ok(report)
            }
            Err(e) => {
                log_error(format!("Reload failed, keeping previous portfolio: {}", e));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = "section,key,title\nprofile,name,Ada\nprofile,role,Analyst\n";

    fn write_dataset(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_snapshot() {
        let file = write_dataset(VALID);
        let store = PortfolioStore::load(file.path()).unwrap();
        assert_eq!(store.snapshot().name(), "Ada");
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let file = write_dataset(VALID);
        let store = PortfolioStore::load(file.path()).unwrap();
        let before = store.snapshot();

        std::fs::write(file.path(), VALID.replace("Ada", "Grace")).unwrap();
        store.reload().unwrap();

        assert_eq!(before.name(), "Ada");
        assert_eq!(store.snapshot().name(), "Grace");
    }

    #[test]
    fn test_failed_reload_keeps_previous() {
        let file = write_dataset(VALID);
        let store = PortfolioStore::load(file.path()).unwrap();

        std::fs::write(file.path(), "section,key,title\nprofile,role,Analyst\n").unwrap();
        assert!(store.reload().is_err());
        assert_eq!(store.snapshot().name(), "Ada");
    }
}
