//! Inline image payloads.
//!
//! Product images are stored in memory as `data:` URLs, the same shape the
//! original upload flow produced. Nothing is ever written to disk.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use gudang_core::{DomainError, DomainResult};

/// Upload ceiling enforced by the form layer (400 KiB of decoded bytes).
pub const MAX_IMAGE_BYTES: usize = 400 * 1024;

/// A decoded `data:` URL payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Encode raw image bytes as a `data:{mime};base64,{payload}` URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decode a base64 `data:` URL back into its mime type and bytes.
pub fn decode_data_url(url: &str) -> DomainResult<DecodedImage> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| DomainError::validation("image must be a data URL"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| DomainError::validation("image data URL has no payload"))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| DomainError::validation("image data URL must be base64-encoded"))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| DomainError::validation(format!("image payload is not valid base64: {e}")))?;

    Ok(DecodedImage {
        mime: mime.to_string(),
        bytes,
    })
}
