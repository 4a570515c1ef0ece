//! The hash accumulator consumed by the pipeline.
//!
//! The pipeline never implements a hash algorithm itself; it drives an
//! opaque [HashEngine] owned by one digest operation. Any RustCrypto
//! hash works out of the box through the blanket impl, for example:
//!
//! ```rust
//! use hashpipe_core::engine::HashEngine;
//!
//! let mut engine = sha2::Sha256::default();
//! engine.update(b"foo");
//! engine.update(b"bar");
//! let digest = engine.finalize();
//! assert_eq!(32, digest.len());
//! ```

/// A stateful, single-use hash accumulator.
///
/// Chunks must be fed through [HashEngine::update] in emission order;
/// hash state depends on it. Finalizing consumes the engine, so a
/// second finalize is ruled out by the type system.
pub trait HashEngine {
    /// Feed a chunk into the accumulator.
    fn update(&mut self, chunk: &[u8]);

    /// Consume the accumulator and return the digest bytes.
    fn finalize(self) -> Vec<u8>;
}

/// Every [digest::Digest] implementor is usable as an engine, so the
/// factory passed to a digester can simply be `Sha256::new` or a
/// closure returning any configured hasher.
impl<D: digest::Digest> HashEngine for D {
    fn update(&mut self, chunk: &[u8]) {
        digest::Digest::update(self, chunk);
    }

    fn finalize(self) -> Vec<u8> {
        digest::Digest::finalize(self).to_vec()
    }
}
