//! Card sources: where a day's raw file content comes from.

use std::collections::HashMap;
use std::future::Future;

use crate::date::DateKey;
use crate::error::FetchError;

/// Fetches the full raw content of a day's file.
///
/// Implementations resolve to the complete body or an error; there is no
/// partial or streaming result.
pub trait CardSource: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    fn fetch(&self, date: &DateKey) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// In-memory source keyed by data path (`data/<YYYYMM>/<YYYYMMDD>.txt`).
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register content for a date, replacing any previous content.
    pub fn insert(&mut self, date: &DateKey, content: impl Into<String>) {
        self.files.insert(date.data_path(), content.into());
    }

    pub fn with(mut self, date: &str, content: impl Into<String>) -> Self {
        self.insert(&DateKey::parse(date), content);
        self
    }
}

impl CardSource for MemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn fetch(&self, date: &DateKey) -> Result<String, FetchError> {
        let path = date.data_path();
        self.files
            .get(&path)
            .cloned()
            .ok_or(FetchError::NotFound { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_source_returns_registered_content() {
        let source = MemorySource::new().with("2025-04-24", "content");
        let body = source.fetch(&DateKey::parse("2025-04-24")).await.unwrap();
        assert_eq!(body, "content");
    }

    #[tokio::test]
    async fn memory_source_matches_on_normalized_path() {
        let source = MemorySource::new().with("2025-04-24", "content");
        let body = source.fetch(&DateKey::parse("2025-04-24 ")).await;
        assert!(body.is_ok());
    }

    #[tokio::test]
    async fn memory_source_reports_missing_path() {
        let source = MemorySource::new();
        let result = source.fetch(&DateKey::parse("2025-04-25")).await;
        assert_eq!(
            result,
            Err(FetchError::NotFound {
                path: "data/202504/20250425.txt".to_string()
            })
        );
    }
}
