//! Shared types for hashpipe.
//!
//! This crate defines the output side of a digest operation: the
//! [Encoding] chosen by the caller and the [DigestValue] produced once
//! the source has been fully consumed.

pub use crate::encoding::{Encoding, UnsupportedEncodingError};
pub use crate::value::DigestValue;

mod encoding;
mod value;
