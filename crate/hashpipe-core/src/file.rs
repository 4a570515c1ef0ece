//! Digest file content without loading it in memory.

use crate::DigestError;
use crate::digester::StreamDigester;
use crate::engine::HashEngine;
use hashpipe_types::{DigestValue, Encoding};
use std::path::Path;
use tokio::fs::{File, OpenOptions};

/// Opens a file path as a byte source and hands it to a
/// [StreamDigester].
///
/// This adds no pipeline behavior of its own; it only deals with
/// opening the file. A path that cannot be opened is reported as
/// [DigestError::Open] before any pipeline is constructed.
pub struct FileDigester<F> {
    digester: StreamDigester<F>,
}

impl<F, H> FileDigester<F>
where
    F: Fn() -> H,
    H: HashEngine + Unpin,
{
    /// File digester returning raw digest bytes.
    pub fn new(new_engine: F) -> Self {
        Self::with_encoding(new_engine, Encoding::Raw)
    }

    /// File digester returning digests rendered in `encoding`.
    pub fn with_encoding(new_engine: F, encoding: Encoding) -> Self {
        Self {
            digester: StreamDigester::with_encoding(new_engine, encoding),
        }
    }

    /// Digest the content of the file at `path`.
    pub async fn digest(&self, path: impl AsRef<Path>) -> Result<DigestValue, DigestError> {
        let path = path.as_ref();
        let file = File::open(path).await.map_err(|source| DigestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("digesting {path:?}");

        self.digester.digest_reader(file).await
    }

    /// Digest the content of the file at `path`, opened with `options`.
    ///
    /// The options must allow reading.
    pub async fn digest_with_options(
        &self,
        path: impl AsRef<Path>,
        options: &OpenOptions,
    ) -> Result<DigestValue, DigestError> {
        let path = path.as_ref();
        let file = options.open(path).await.map_err(|source| DigestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("digesting {path:?}");

        self.digester.digest_reader(file).await
    }
}
