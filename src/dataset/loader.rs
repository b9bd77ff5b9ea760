//! Dataset Loader
//!
//! Fetches `student_data.json` from a file, a URL or memory.
//!
//! Every fetch is a single attempt: no retry, no backoff and no timeout
//! beyond what the transport imposes. Callers surface the error and stop.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;

use super::error::{LoadError, LoadResult};
use super::types::Dataset;

/// Where a dataset document comes from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Retrieve and parse the document
    async fn fetch(&self) -> LoadResult<Dataset>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}

/// Dataset stored on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> LoadResult<Dataset> {
        let bytes = tokio::fs::read(&self.path).await?;
        Dataset::from_json(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dataset served over HTTP
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> LoadResult<Dataset> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LoadError::Request(e.to_string()))?;

        Dataset::from_json(&bytes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Dataset held in memory
#[derive(Debug, Clone)]
pub struct StaticSource {
    dataset: Dataset,
}

impl StaticSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    async fn fetch(&self) -> LoadResult<Dataset> {
        self.dataset.validate()?;
        Ok(self.dataset.clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

/// Build a source from a location string
///
/// `http://` and `https://` locations are fetched with an HTTP client,
/// anything else is treated as a file path.
pub fn source_for(location: &str) -> Arc<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpSource::new(location))
    } else {
        Arc::new(FileSource::new(location))
    }
}

/// How repeated loads are served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Fetch on every load, views never share a copy
    #[default]
    Fresh,
    /// Single-flight shared copy; failed loads are not cached
    Shared,
}

/// Loads datasets from a source according to a policy
pub struct DatasetLoader {
    source: Arc<dyn DatasetSource>,
    policy: LoadPolicy,
    shared: OnceCell<Arc<Dataset>>,
}

impl DatasetLoader {
    /// Create a loader that fetches fresh on every call
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self::with_policy(source, LoadPolicy::Fresh)
    }

    pub fn with_policy(source: Arc<dyn DatasetSource>, policy: LoadPolicy) -> Self {
        Self {
            source,
            policy,
            shared: OnceCell::new(),
        }
    }

    /// Loader over an in-memory dataset
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::new(Arc::new(StaticSource::new(dataset)))
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Load the dataset
    pub async fn load(&self) -> LoadResult<Arc<Dataset>> {
        match self.policy {
            LoadPolicy::Fresh => self.fetch_logged().await.map(Arc::new),
            LoadPolicy::Shared => self
                .shared
                .get_or_try_init(|| async { self.fetch_logged().await.map(Arc::new) })
                .await
                .map(Arc::clone),
        }
    }

    async fn fetch_logged(&self) -> LoadResult<Dataset> {
        let started = Instant::now();
        match self.source.fetch().await {
            Ok(dataset) => {
                tracing::info!(
                    source = %self.source.describe(),
                    students = dataset.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Loaded student dataset"
                );
                Ok(dataset)
            }
            Err(e) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    error = %e,
                    "Failed to load student dataset"
                );
                Err(e)
            }
        }
    }
}
