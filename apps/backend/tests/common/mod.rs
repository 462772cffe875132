//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext, which lays out a throwaway data/images tree on disk
//! - A router built over that tree
//! - Helpers for writing day files and images

pub mod fixtures;

use std::path::{Path, PathBuf};

use axum::Router;
use uuid::Uuid;

use daily_trivia_backend::config::Config;
use daily_trivia_backend::{router, AppState};
use trivia_core::{DateKey, FailurePolicy};

pub const PLACEHOLDER_BYTES: &[u8] = b"placeholder";

/// Test context owning a temporary data root.
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    pub root: PathBuf,
    pub config: Config,
    pub state: AppState,
}

impl TestContext {
    /// Create a context with the default failure policy.
    pub fn new() -> Self {
        Self::with_policy(FailurePolicy::default())
    }

    pub fn with_policy(policy: FailurePolicy) -> Self {
        let root = std::env::temp_dir().join(format!("daily-trivia-{}", Uuid::new_v4()));
        std::fs::create_dir_all(root.join("data")).expect("create data dir");
        std::fs::create_dir_all(root.join("images")).expect("create images dir");
        std::fs::write(root.join("images/placeholder.png"), PLACEHOLDER_BYTES)
            .expect("write placeholder");

        let mut config = Config::local(&root);
        config.failure_policy = policy;
        let state = AppState::new(&config);

        Self {
            root,
            config,
            state,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        router(self.state.clone(), &self.config)
    }

    /// Write the data file for `date`.
    pub fn write_day(&self, date: &str, content: &str) {
        self.write_day_bytes(date, content.as_bytes());
    }

    /// Write raw bytes as the data file for `date`.
    pub fn write_day_bytes(&self, date: &str, bytes: &[u8]) {
        let path = self.config.data_dir.join(DateKey::parse(date).data_file());
        write_file(&path, bytes);
    }

    /// Write an image under `images/<YYYYMM>/`.
    pub fn write_image(&self, date: &str, name: &str, bytes: &[u8]) {
        let key = DateKey::parse(date);
        let path = self.config.images_dir.join(key.year_month()).join(name);
        write_file(&path, bytes);
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, bytes).expect("write test file");
}
