//! Pass-through stage that hashes everything flowing through it.

use crate::DigestError;
use crate::engine::HashEngine;
use bytes::Bytes;
use futures::Stream;
use hashpipe_types::{DigestValue, Encoding};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A byte-stream stage that forwards chunks unchanged while feeding
/// them into a [HashEngine].
///
/// It implements the same [Stream] shape it wraps, so it can be
/// inserted transparently into any pipeline that moves bytes to a real
/// consumer; the digest accumulates as a side effect. Each chunk is
/// fed to the engine before it is forwarded, and chunk order is
/// preserved end to end.
///
/// Once the inner stream is exhausted, [HashThrough::digest] extracts
/// the digest. That call is one-shot: the engine is consumed by it.
pub struct HashThrough<S, H> {
    inner: S,
    engine: Option<H>,
    exhausted: bool,
}

impl<S, H> HashThrough<S, H>
where
    H: HashEngine,
{
    /// Wrap `inner`, hashing with a freshly constructed `engine`.
    ///
    /// The engine is owned by this stage for its whole lifetime and
    /// must not be shared with another pipeline.
    pub fn new(inner: S, engine: H) -> Self {
        Self {
            inner,
            engine: Some(engine),
            exhausted: false,
        }
    }

    /// Finalize the engine and return the digest in `encoding`.
    ///
    /// Valid only after the wrapped stream has reported end-of-data;
    /// calling it earlier fails with [DigestError::StillStreaming].
    /// Calling it a second time is a misuse and fails with
    /// [DigestError::AlreadyFinalized] rather than returning a stale
    /// value.
    pub fn digest(&mut self, encoding: Encoding) -> Result<DigestValue, DigestError> {
        if !self.exhausted {
            return Err(DigestError::StillStreaming);
        }
        let engine = self.engine.take().ok_or(DigestError::AlreadyFinalized)?;

        Ok(encoding.encode(&engine.finalize()))
    }
}

impl<S, H> Stream for HashThrough<S, H>
where
    S: Stream<Item = io::Result<Bytes>> + Unpin,
    H: HashEngine + Unpin,
{
    type Item = io::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match Pin::new(&mut this.inner).poll_next(cx) {
            Poll::Ready(Some(Ok(chunk))) => {
                // Update before forwarding, so the engine has seen the
                // chunk by the time any downstream ack fires.
                if let Some(engine) = this.engine.as_mut() {
                    engine.update(&chunk);
                }
                Poll::Ready(Some(Ok(chunk)))
            }
            Poll::Ready(None) => {
                this.exhausted = true;
                Poll::Ready(None)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt as _;
    use futures::stream;
    use sha2::{Digest as _, Sha256};

    fn chunks(parts: &[&'static [u8]]) -> impl Stream<Item = io::Result<Bytes>> + Unpin {
        stream::iter(
            parts
                .iter()
                .map(|part| Ok(Bytes::from_static(part)))
                .collect::<Vec<_>>(),
        )
    }

    #[tokio::test]
    async fn test_forwards_chunks_unchanged() -> anyhow::Result<()> {
        let mut through = HashThrough::new(chunks(&[b"foo", b"bar"]), Sha256::new());

        let mut forwarded = Vec::new();
        while let Some(chunk) = through.next().await {
            forwarded.push(chunk?);
        }
        assert_eq!(vec![Bytes::from_static(b"foo"), Bytes::from_static(b"bar")], forwarded);

        Ok(())
    }

    #[tokio::test]
    async fn test_digest_after_exhaustion() -> anyhow::Result<()> {
        let mut through = HashThrough::new(chunks(&[b"foo", b"bar"]), Sha256::new());
        while through.next().await.is_some() {}

        let digest = through.digest(Encoding::Raw)?;
        assert_eq!(
            Some(Sha256::digest(b"foobar").as_slice()),
            digest.as_bytes()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_digest_before_exhaustion_is_misuse() -> anyhow::Result<()> {
        let mut through = HashThrough::new(chunks(&[b"foo", b"bar"]), Sha256::new());
        through.next().await;

        assert!(matches!(
            through.digest(Encoding::Hex),
            Err(DigestError::StillStreaming)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_second_digest_is_misuse() -> anyhow::Result<()> {
        let mut through = HashThrough::new(chunks(&[b"foo"]), Sha256::new());
        while through.next().await.is_some() {}

        through.digest(Encoding::Hex)?;
        assert!(matches!(
            through.digest(Encoding::Hex),
            Err(DigestError::AlreadyFinalized)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_source_error_passes_through() {
        let source = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(io::Error::other("disk on fire")),
        ]);
        let mut through = HashThrough::new(source, Sha256::new());

        assert!(through.next().await.unwrap().is_ok());
        assert!(through.next().await.unwrap().is_err());
    }
}
