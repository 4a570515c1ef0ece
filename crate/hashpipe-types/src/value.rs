/// Final result of a digest operation.
///
/// A digest is semantically a fixed-length byte sequence; depending on
/// the [Encoding](crate::Encoding) the caller picked, it is carried
/// either as the bytes themselves or as their textual rendering. A
/// value is produced exactly once per digest operation and never
/// mutated afterwards.
#[derive(Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DigestValue {
    /// Raw digest bytes.
    Bytes(Vec<u8>),

    /// Digest rendered as text (hex, base64 or latin1).
    Text(String),
}

impl DigestValue {
    /// The raw digest bytes, if this value was left unencoded.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            DigestValue::Bytes(bytes) => Some(bytes),
            DigestValue::Text(_) => None,
        }
    }

    /// The textual rendering, if a text encoding was applied.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DigestValue::Bytes(_) => None,
            DigestValue::Text(text) => Some(text),
        }
    }
}

impl std::fmt::Debug for DigestValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl std::fmt::Display for DigestValue {
    /// Text values display as-is; raw bytes display as hex.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestValue::Bytes(bytes) => f.write_str(&hex::encode(bytes)),
            DigestValue::Text(text) => f.write_str(text),
        }
    }
}

impl PartialEq<&str> for DigestValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<DigestValue> for &str {
    fn eq(&self, other: &DigestValue) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let bytes = DigestValue::Bytes(vec![1, 2, 3]);
        assert_eq!(Some(&[1u8, 2, 3][..]), bytes.as_bytes());
        assert_eq!(None, bytes.as_text());

        let text = DigestValue::Text("abc".to_string());
        assert_eq!(None, text.as_bytes());
        assert_eq!(Some("abc"), text.as_text());
    }

    #[test]
    fn test_display_bytes_as_hex() {
        assert_eq!(
            "00ff10",
            DigestValue::Bytes(vec![0x00, 0xff, 0x10]).to_string()
        );
    }

    #[test]
    fn test_display_text_verbatim() {
        assert_eq!("3q2+7w==", DigestValue::Text("3q2+7w==".to_string()).to_string());
    }

    #[test]
    fn test_str_comparison() {
        let value = DigestValue::Text("deadbeef".to_string());
        assert_eq!(value, "deadbeef");
        assert_eq!("deadbeef", value);
        assert_ne!(DigestValue::Bytes(vec![0xde]), "de");
    }
}
