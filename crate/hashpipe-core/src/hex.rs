//! Digester factories with the hex output encoding preselected.
//!
//! Pure partial application over [StreamDigester] and [FileDigester];
//! no behavior or state of its own.

use crate::digester::StreamDigester;
use crate::engine::HashEngine;
use crate::file::FileDigester;
use hashpipe_types::Encoding;

/// A [StreamDigester] that renders digests as hex.
pub fn stream_digester<F, H>(new_engine: F) -> StreamDigester<F>
where
    F: Fn() -> H,
    H: HashEngine + Unpin,
{
    StreamDigester::with_encoding(new_engine, Encoding::Hex)
}

/// A [FileDigester] that renders digests as hex.
pub fn file_digester<F, H>(new_engine: F) -> FileDigester<F>
where
    F: Fn() -> H,
    H: HashEngine + Unpin,
{
    FileDigester::with_encoding(new_engine, Encoding::Hex)
}
