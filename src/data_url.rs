//! Helpers for base64 payloads that may arrive as `data:` URLs.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::AppError;

/// Split `data:<mime>;base64,<payload>` into its MIME type and payload.
/// Plain base64 input is returned unchanged with no MIME type.
pub fn split_data_url(input: &str) -> (Option<&str>, &str) {
    let input = input.trim();
    match input.strip_prefix("data:").and_then(|rest| rest.split_once(',')) {
        Some((header, payload)) => {
            let mime = header
                .split(';')
                .next()
                .filter(|mime| !mime.is_empty());
            (mime, payload)
        }
        None => (None, input),
    }
}

/// Decode a base64 (or data URL) payload into raw bytes.
pub fn decode(input: &str) -> Result<Vec<u8>, AppError> {
    let (_, payload) = split_data_url(input);
    STANDARD
        .decode(payload)
        .map_err(|e| AppError::InvalidRequest(format!("payload is not valid base64: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_data_url_prefix() {
        let (mime, payload) = split_data_url("data:image/png;base64,aGVsbG8=");
        assert_eq!(mime, Some("image/png"));
        assert_eq!(payload, "aGVsbG8=");
    }

    #[test]
    fn plain_base64_passes_through() {
        let (mime, payload) = split_data_url("aGVsbG8=");
        assert_eq!(mime, None);
        assert_eq!(payload, "aGVsbG8=");
    }

    #[test]
    fn decodes_either_form() {
        assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
        assert_eq!(decode("data:text/plain;base64,aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(decode("not base64!!"), Err(AppError::InvalidRequest(_))));
    }
}
