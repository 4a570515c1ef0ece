//! Digest a byte stream by draining it through a hashing stage.

use crate::DigestError;
use crate::engine::HashEngine;
use crate::sink::DevNull;
use crate::through::HashThrough;
use bytes::Bytes;
use futures::{Stream, StreamExt as _};
use hashpipe_types::{DigestValue, Encoding};
use std::io;
use std::pin::pin;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// Chunk size used when adapting an [AsyncRead] into a chunk stream.
const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Computes the digest of byte streams.
///
/// Built once from a [HashEngine] factory and an output [Encoding],
/// then reusable: every digest operation instantiates a fresh engine,
/// a fresh pass-through stage and a fresh sink, so operations never
/// share hash state.
///
/// # Examples
///
/// ```rust
/// use bytes::Bytes;
/// use futures::stream;
/// use hashpipe_core::digester::StreamDigester;
/// use hashpipe_core::Encoding;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let digester = StreamDigester::with_encoding(sha2::Sha256::default, Encoding::Hex);
/// let source = stream::iter([Ok(Bytes::from_static(b"hello"))]);
/// let digest = digester.digest(source).await.unwrap();
/// assert_eq!(
///     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
///     digest,
/// );
/// # });
/// ```
pub struct StreamDigester<F> {
    new_engine: F,
    encoding: Encoding,
}

impl<F, H> StreamDigester<F>
where
    F: Fn() -> H,
    H: HashEngine + Unpin,
{
    /// Digester returning raw digest bytes.
    pub fn new(new_engine: F) -> Self {
        Self::with_encoding(new_engine, Encoding::Raw)
    }

    /// Digester returning digests rendered in `encoding`.
    pub fn with_encoding(new_engine: F, encoding: Encoding) -> Self {
        Self {
            new_engine,
            encoding,
        }
    }

    /// Digest `source`, consuming it to exhaustion.
    ///
    /// The source is read exactly once, in order, with no buffering
    /// barrier between it and the hash engine. The digest is extracted
    /// strictly after the last chunk has been observed. If the source
    /// fails mid-stream the error is reported through the returned
    /// future; the partially accumulated hash state is discarded.
    pub async fn digest<S>(&self, source: S) -> Result<DigestValue, DigestError>
    where
        S: Stream<Item = io::Result<Bytes>> + Unpin,
    {
        let mut through = HashThrough::new(source, (self.new_engine)());

        // Drain the hashing stage into the sink. The forward future
        // resolving is the completion signal: it fires exactly once,
        // when the source is exhausted or has failed.
        (&mut through).forward(DevNull::new()).await?;

        through.digest(self.encoding)
    }

    /// Digest everything `reader` produces, until end of file.
    pub async fn digest_reader<R>(&self, reader: R) -> Result<DigestValue, DigestError>
    where
        R: AsyncRead,
    {
        let source = pin!(ReaderStream::with_capacity(reader, READ_BUFFER_SIZE));

        self.digest(source).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use sha1::Sha1;
    use sha2::{Digest as _, Sha256};

    fn empty_source() -> impl Stream<Item = io::Result<Bytes>> + Unpin {
        stream::iter(Vec::new())
    }

    #[tokio::test]
    async fn test_empty_source_yields_empty_input_digest() -> anyhow::Result<()> {
        let digester = StreamDigester::with_encoding(Sha256::new, Encoding::Hex);

        assert_eq!(
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            digester.digest(empty_source()).await?,
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_reader_yields_empty_input_digest() -> anyhow::Result<()> {
        let digester = StreamDigester::with_encoding(Sha1::new, Encoding::Hex);

        assert_eq!(
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
            digester.digest_reader(tokio::io::empty()).await?,
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_source_error_rejects_instead_of_hanging() {
        let digester = StreamDigester::new(Sha256::new);
        let source = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(io::Error::other("disk on fire")),
        ]);

        assert!(matches!(
            digester.digest(source).await,
            Err(DigestError::Source(_))
        ));
    }

    #[tokio::test]
    async fn test_digester_is_reusable_with_fresh_state() -> anyhow::Result<()> {
        let digester = StreamDigester::with_encoding(Sha256::new, Encoding::Hex);

        let first = digester
            .digest(stream::iter([Ok(Bytes::from_static(b"data"))]))
            .await?;
        let second = digester
            .digest(stream::iter([Ok(Bytes::from_static(b"data"))]))
            .await?;

        // Same digester, same input: state did not leak between runs.
        assert_eq!(first, second);

        Ok(())
    }
}
