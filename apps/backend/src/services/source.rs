//! Card sources backed by the local filesystem or a remote static host.

use std::path::PathBuf;

use trivia_core::{CardSource, DateKey, FetchError};

use crate::config::{Config, SourceConfig};

/// Reads `<root>/<YYYYMM>/<YYYYMMDD>.txt`.
#[derive(Debug, Clone)]
pub struct FsCardSource {
    root: PathBuf,
}

impl FsCardSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Components are joined one by one so an empty year-month stays
    /// under the root.
    pub fn path_for(&self, date: &DateKey) -> PathBuf {
        self.root
            .join(date.year_month())
            .join(format!("{}.txt", date.file_date()))
    }
}

impl CardSource for FsCardSource {
    fn name(&self) -> &'static str {
        "fs"
    }

    async fn fetch(&self, date: &DateKey) -> Result<String, FetchError> {
        let path = self.path_for(date);
        tracing::debug!("Reading {}", path.display());

        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            let path = path.display().to_string();
            match e.kind() {
                std::io::ErrorKind::NotFound => FetchError::NotFound { path },
                _ => FetchError::Io {
                    path,
                    message: e.to_string(),
                },
            }
        })?;

        // Decode like an HTTP body: invalid bytes become U+FFFD.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// GETs `<base_url>/data/<YYYYMM>/<YYYYMMDD>.txt`.
#[derive(Debug, Clone)]
pub struct HttpCardSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCardSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, date: &DateKey) -> String {
        format!("{}/{}", self.base_url, date.data_path())
    }
}

impl CardSource for HttpCardSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, date: &DateKey) -> Result<String, FetchError> {
        let url = self.url_for(date);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

/// The configured source.
#[derive(Debug, Clone)]
pub enum DataSource {
    Fs(FsCardSource),
    Http(HttpCardSource),
}

impl DataSource {
    pub fn from_config(config: &Config) -> Self {
        match &config.source {
            SourceConfig::Fs => Self::Fs(FsCardSource::new(config.data_dir.clone())),
            SourceConfig::Http { base_url } => Self::Http(HttpCardSource::new(base_url.as_str())),
        }
    }
}

impl CardSource for DataSource {
    fn name(&self) -> &'static str {
        match self {
            Self::Fs(s) => s.name(),
            Self::Http(s) => s.name(),
        }
    }

    async fn fetch(&self, date: &DateKey) -> Result<String, FetchError> {
        match self {
            Self::Fs(s) => s.fetch(date).await,
            Self::Http(s) => s.fetch(date).await,
        }
    }
}
