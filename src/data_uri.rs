// src/data_uri.rs

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use regex::Regex;

use crate::error::AppError;

pub const PNG_PREFIX: &str = "data:image/png;base64,";

fn image_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^data:image/[a-z0-9.+-]+;base64,").expect("static data-uri regex")
    })
}

/// PNG bytes -> `data:image/png;base64,...`.
pub fn encode_png(bytes: &[u8]) -> String {
    format!("{PNG_PREFIX}{}", B64.encode(bytes))
}

/// Decode any base64 `data:image/*` URI back to raw image bytes.
pub fn decode(uri: &str) -> Result<Vec<u8>, AppError> {
    let m = image_prefix_re()
        .find(uri)
        .ok_or_else(|| AppError::InvalidDataUri("missing data:image/*;base64 prefix".to_string()))?;

    B64.decode(&uri[m.end()..])
        .map_err(|e| AppError::InvalidDataUri(format!("base64 payload: {e}")))
}

pub fn is_image_data_uri(s: &str) -> bool {
    image_prefix_re().is_match(s)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let bytes = vec![0x89u8, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
        let uri = encode_png(&bytes);
        assert!(uri.starts_with(PNG_PREFIX));
        assert_eq!(decode(&uri).unwrap(), bytes);
    }

    #[test]
    fn accepts_other_image_mime_types() {
        let uri = format!("data:image/jpeg;base64,{}", B64.encode([1u8, 2, 3]));
        assert!(is_image_data_uri(&uri));
        assert_eq!(decode(&uri).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn rejects_non_image_or_unprefixed_strings() {
        assert!(!is_image_data_uri(""));
        assert!(!is_image_data_uri("data:text/plain;base64,aGk="));
        assert!(!is_image_data_uri("iVBORw0KGgo="));

        assert!(matches!(decode("hello"), Err(AppError::InvalidDataUri(_))));
        assert!(matches!(
            decode("data:image/png;base64,not-base64!!!"),
            Err(AppError::InvalidDataUri(_))
        ));
    }
}
