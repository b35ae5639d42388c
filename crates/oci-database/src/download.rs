//! Destinations for binary downloads.
//!
//! Operations that return a file (wallets, configuration bundles) come in two
//! forms: a buffered method returning the whole body as [`Bytes`], and a
//! `_to` method that writes each chunk into a [`DownloadSink`] as it arrives.
//!
//! ```rust,no_run
//! use oci_database::download::{self, FileSink};
//! # async fn example(client: oci_database::DatabaseClient) -> oci_database::Result<()> {
//! use oci_database::options::CreateOptions;
//!
//! // Straight to disk
//! let mut file = FileSink::create("exadata-config.zip").await?;
//! client
//!     .exadata_infrastructures()
//!     .download_config_file_to("ocid1.exadatainfrastructure.oc1..x", &mut file, CreateOptions::default())
//!     .await?;
//!
//! // Chunk by chunk
//! let mut total = 0usize;
//! let mut sink = download::from_fn(|chunk: &[u8]| {
//!     total += chunk.len();
//!     Ok(())
//! });
//! client
//!     .exadata_infrastructures()
//!     .download_config_file_to("ocid1.exadatainfrastructure.oc1..x", &mut sink, CreateOptions::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Receives the chunks of a download in order.
#[async_trait]
pub trait DownloadSink: Send {
    /// Write one chunk.
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<()>;

    /// Called once after the last chunk.
    async fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl DownloadSink for Vec<u8> {
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        self.extend_from_slice(chunk);
        Ok(())
    }
}

/// Adapts any async writer.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin + Send> WriterSink<W> {
    /// Wrap `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Take the writer back.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> DownloadSink for WriterSink<W> {
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        self.writer.write_all(chunk).await?;
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        self.writer.flush().await?;
        Ok(())
    }
}

/// Writes the download to a file created for the call.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: tokio::io::BufWriter<tokio::fs::File>,
}

impl FileSink {
    /// Create (or truncate) the file at `path`.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = tokio::fs::File::create(&path).await?;
        Ok(Self {
            path,
            file: tokio::io::BufWriter::new(file),
        })
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DownloadSink for FileSink {
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        self.file.write_all(chunk).await?;
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        self.file.flush().await?;
        self.file.get_mut().sync_all().await?;
        Ok(())
    }
}

/// Sink calling `f` for every chunk.
pub struct FnSink<F> {
    f: F,
}

/// Build a sink from a per-chunk callback.
pub fn from_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(&[u8]) -> Result<()> + Send,
{
    FnSink { f }
}

#[async_trait]
impl<F> DownloadSink for FnSink<F>
where
    F: FnMut(&[u8]) -> Result<()> + Send,
{
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        (self.f)(chunk)
    }
}

/// Copy a chunk stream into `sink`, returning the number of bytes written.
pub(crate) async fn drain<S>(
    operation: &'static str,
    mut stream: crate::http::ByteStream,
    sink: &mut S,
) -> Result<u64>
where
    S: DownloadSink + ?Sized,
{
    use futures::StreamExt;

    let mut ctx = crate::observability::DownloadContext::start(operation);
    while let Some(chunk) = stream.next().await {
        let written = match chunk {
            Ok(chunk) => write(sink, &chunk).await.map(|_| chunk.len()),
            Err(e) => Err(e),
        };
        match written {
            Ok(len) => ctx.record_chunk(len),
            Err(e) => {
                ctx.log_error(&e.to_string());
                return Err(e);
            }
        }
    }
    if let Err(e) = sink.finish().await {
        ctx.log_error(&e.to_string());
        return Err(e);
    }
    ctx.log_complete();
    Ok(ctx.bytes_written)
}

async fn write<S: DownloadSink + ?Sized>(sink: &mut S, chunk: &Bytes) -> Result<()> {
    if chunk.is_empty() {
        return Ok(());
    }
    sink.write_chunk(chunk).await
}
