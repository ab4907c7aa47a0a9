/// Byte written in place of characters outside ISO-8859-1.
pub const SUBSTITUTE: u8 = b'?';

/// A document encoded as single-byte ISO-8859-1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Latin1 {
    pub bytes: Vec<u8>,
    /// Number of characters replaced by [`SUBSTITUTE`]
    pub substituted: usize,
}

/// Encode `text` as ISO-8859-1. Characters above U+00FF become `?`;
/// encoding never fails.
pub fn encode_latin1(text: &str) -> Latin1 {
    let mut bytes = Vec::with_capacity(text.len());
    let mut substituted = 0;

    for c in text.chars() {
        match u8::try_from(u32::from(c)) {
            Ok(byte) => bytes.push(byte),
            Err(_) => {
                bytes.push(SUBSTITUTE);
                substituted += 1;
            }
        }
    }

    if substituted > 0 {
        tracing::warn!(substituted, "Characters outside Latin-1 replaced with '?'");
    }

    Latin1 { bytes, substituted }
}
