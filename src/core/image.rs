//! Product image resolution.
//!
//! The backend's `gambar` field is inconsistent: it may hold an absolute URL, a data
//! URI, bare base64 image bytes, or a path relative to the backend. [`resolve_image`]
//! turns it into something renderable. It never picks a fallback itself; callers
//! decide what to show on `Err`.

use crate::entities::ImageSource;
use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use thiserror::Error;

/// Standard alphabet, accepting input with or without `=` padding.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Inputs longer than this that look like base64 are treated as image bytes.
const BASE64_MIN_LEN: usize = 50;

/// Known image containers by leading bytes. First match wins.
const SIGNATURES: &[(&[u8], &str)] = &[
    (&[0xFF, 0xD8, 0xFF], "jpeg"),
    (&[0x89, 0x50, 0x4E, 0x47], "png"),
    (&[0x47, 0x49, 0x46, 0x38], "gif"),
    (&[0x52, 0x49, 0x46, 0x46], "webp"),
];

/// Why an image could not be resolved
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Field was absent or blank
    #[error("image field is empty")]
    Empty,
    /// Looked like base64 but did not decode
    #[error("invalid base64 image data: {0}")]
    Decode(String),
}

/// Sniffs the image container from decoded bytes. Unrecognised input is reported as jpeg.
pub fn detect_image_type(bytes: &[u8]) -> &'static str {
    SIGNATURES
        .iter()
        .find(|(magic, _)| bytes.starts_with(magic))
        .map_or("jpeg", |(_, kind)| *kind)
}

fn is_base64_alphabet(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
}

fn base64_data_uri(data: &str) -> Result<ImageSource, ImageError> {
    let bytes = LENIENT_BASE64
        .decode(data)
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    let kind = detect_image_type(&bytes);
    Ok(ImageSource::DataUri(format!("data:image/{kind};base64,{data}")))
}

fn join_relative(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Resolves a raw `gambar` value against the backend base URL.
///
/// Order of checks: blank, absolute URL, data URI, long base64 (whitespace ignored),
/// any base64-looking value, and finally a relative path.
///
/// # Errors
/// [`ImageError::Empty`] for blank input, [`ImageError::Decode`] when the value looks
/// like base64 but does not decode.
pub fn resolve_image(raw: &str, base_url: &str) -> Result<ImageSource, ImageError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ImageError::Empty);
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Ok(ImageSource::Url(trimmed.to_string()));
    }

    if trimmed.starts_with("data:image") {
        return Ok(ImageSource::DataUri(trimmed.to_string()));
    }

    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() > BASE64_MIN_LEN && is_base64_alphabet(&compact) {
        return base64_data_uri(&compact);
    }

    if is_base64_alphabet(trimmed) {
        return base64_data_uri(trimmed);
    }

    Ok(ImageSource::Url(join_relative(base_url, trimmed)))
}
