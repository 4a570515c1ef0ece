//! hashpipe - Streaming Digest Pipeline
//!
//! This crate computes the digest of bytes flowing through an
//! arbitrary async byte stream, without buffering the content, and
//! returns it in a caller-chosen output encoding. It is a utility
//! layer above a hash implementation, not a hash implementation: any
//! [digest::Digest] hasher plugs in as the engine.
//!
//! # Main Components
//!
//! - `engine`: the opaque hash accumulator driven by the pipeline.
//! - `through`: pass-through stream stage that hashes what it forwards.
//! - `sink`: discarding chunk sink with deferred acknowledgment.
//! - `digester`: the orchestrator; drains a source through the hashing
//!   stage, then extracts the digest.
//! - `file`: opens a path and digests its content.
//! - `hex`: digester factories with hex output preselected.

pub mod digester;
pub mod engine;
pub mod file;
pub mod hex;
pub mod sink;
pub mod through;

mod error;

pub use error::DigestError;
pub use hashpipe_types::{DigestValue, Encoding, UnsupportedEncodingError};
