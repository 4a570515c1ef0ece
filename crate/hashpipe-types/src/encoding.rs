use crate::value::DigestValue;
use base64::Engine as _;
use std::str::FromStr;

/// Output encoding applied to a finalized digest.
///
/// [Encoding::Raw] leaves the digest as a byte sequence; all other
/// encodings render it as text. Encoding happens once, after the last
/// byte of the source has been hashed; it never affects what is fed to
/// the hash engine.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// No encoding; the digest is returned as raw bytes.
    #[default]
    Raw,

    /// Lowercase hexadecimal.
    Hex,

    /// Standard base64 with padding.
    Base64,

    /// One character per digest byte, codepoints U+0000 to U+00FF.
    Latin1,
}

impl Encoding {
    /// Render `digest` in this encoding.
    pub fn encode(&self, digest: &[u8]) -> DigestValue {
        match self {
            Encoding::Raw => DigestValue::Bytes(digest.to_vec()),
            Encoding::Hex => DigestValue::Text(hex::encode(digest)),
            Encoding::Base64 => {
                DigestValue::Text(base64::prelude::BASE64_STANDARD.encode(digest))
            }
            Encoding::Latin1 => DigestValue::Text(digest.iter().map(|b| char::from(*b)).collect()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Encoding::Raw => "raw",
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Latin1 => "latin1",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = UnsupportedEncodingError;

    /// Parse an encoding name.
    ///
    /// Accepts `raw` (alias `none`), `hex`, `base64` and `latin1`
    /// (alias `binary`). Anything else fails with
    /// [UnsupportedEncodingError]; the failure is reported before any
    /// source bytes are consumed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" | "none" => Ok(Encoding::Raw),
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            other => Err(UnsupportedEncodingError(other.to_string())),
        }
    }
}

/// The requested digest encoding is not recognized.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[error("unsupported digest encoding: {0:?}")]
pub struct UnsupportedEncodingError(pub String);
