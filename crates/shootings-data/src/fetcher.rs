//! Dataset downloads.
//!
//! Each configured dataset is fetched with a plain HTTP GET and streamed to
//! `<data_dir>/<file_name>` in writes of `chunk_size` bytes. JSON datasets
//! are checked for well-formedness once written.

use reqwest::Client;
use shootings_common::{DatasetFormat, DatasetSource, Result, ShootingsError};
use shootings_config::SourcesConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

/// Outcome of a single download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    /// Dataset name
    pub name: String,
    /// Where the body was written
    pub path: PathBuf,
    /// Number of body bytes written
    pub bytes: u64,
    /// Number of writes issued to the file
    pub chunks: u64,
}

/// Downloads datasets into the data directory.
#[derive(Debug, Clone)]
pub struct DataFetcher {
    client: Client,
    data_dir: PathBuf,
    chunk_size: usize,
}

impl DataFetcher {
    /// Create a fetcher from the sources configuration
    pub fn new(config: &SourcesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ShootingsError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            data_dir: config.data_dir.clone(),
            chunk_size: config.chunk_size.max(1),
        })
    }

    /// Directory datasets are written to.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Creates the data directory. An existing directory is not an error.
    pub async fn ensure_data_dir(&self) -> Result<()> {
        match fs::metadata(&self.data_dir).await {
            Ok(meta) if meta.is_dir() => {
                info!("Data directory {} already exists", self.data_dir.display());
                Ok(())
            }
            _ => {
                fs::create_dir_all(&self.data_dir).await?;
                info!("Created data directory {}", self.data_dir.display());
                Ok(())
            }
        }
    }

    /// Downloads one dataset.
    #[instrument(skip(self, source), fields(dataset = %source.name, url = %source.url))]
    pub async fn fetch(&self, source: &DatasetSource) -> Result<FetchReport> {
        self.ensure_data_dir().await?;

        let mut response = self.client.get(&source.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShootingsError::network_with_status(
                format!("GET {} returned {status}", source.url),
                status.as_u16(),
            ));
        }

        let path = self.data_dir.join(&source.file_name);
        let file = fs::File::create(&path).await?;
        let mut writer = ChunkedWriter::new(file, self.chunk_size);

        while let Some(chunk) = response.chunk().await? {
            writer.write(&chunk).await?;
        }
        writer.finish().await?;
        let (bytes, chunks) = (writer.bytes, writer.chunks);
        debug!(bytes, chunks, "Finished streaming body");

        if source.format == DatasetFormat::Json {
            verify_json(&path).await?;
        }

        info!("Saved {} ({bytes} bytes) to {}", source.name, path.display());
        Ok(FetchReport {
            name: source.name.clone(),
            path,
            bytes,
            chunks,
        })
    }

    /// Downloads datasets in order, stopping at the first failure.
    pub async fn fetch_all(&self, sources: &[DatasetSource]) -> Result<Vec<FetchReport>> {
        let mut reports = Vec::with_capacity(sources.len());
        for source in sources {
            reports.push(self.fetch(source).await?);
        }
        info!("Downloaded {} datasets", reports.len());
        Ok(reports)
    }
}

/// Regroups arbitrary body pieces into writes of exactly `chunk_size` bytes;
/// only the final write may be shorter.
struct ChunkedWriter<W> {
    inner: W,
    pending: Vec<u8>,
    chunk_size: usize,
    bytes: u64,
    chunks: u64,
}

impl<W: AsyncWrite + Unpin> ChunkedWriter<W> {
    fn new(inner: W, chunk_size: usize) -> Self {
        Self {
            inner,
            pending: Vec::with_capacity(chunk_size),
            chunk_size,
            bytes: 0,
            chunks: 0,
        }
    }

    async fn write(&mut self, mut data: &[u8]) -> std::io::Result<()> {
        while !data.is_empty() {
            let take = (self.chunk_size - self.pending.len()).min(data.len());
            self.pending.extend_from_slice(&data[..take]);
            data = &data[take..];
            if self.pending.len() == self.chunk_size {
                self.write_pending().await?;
            }
        }
        Ok(())
    }

    async fn write_pending(&mut self) -> std::io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.inner.write_all(&self.pending).await?;
        self.bytes += self.pending.len() as u64;
        self.chunks += 1;
        self.pending.clear();
        Ok(())
    }

    async fn finish(&mut self) -> std::io::Result<()> {
        self.write_pending().await?;
        self.inner.flush().await
    }
}

async fn verify_json(path: &Path) -> Result<()> {
    let body = fs::read(path).await?;
    serde_json::from_slice::<serde::de::IgnoredAny>(&body).map_err(|e| {
        ShootingsError::data_with_source(
            format!("{} is not well-formed JSON", path.display()),
            e,
        )
    })?;
    Ok(())
}
