use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// URL-safe base64 without padding, as used for every JWT segment.
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

pub fn decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}
