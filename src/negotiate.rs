//! Compression negotiation for HTTP requests and responses
//!
//! Tags outgoing requests with an `Accept-Encoding` preference and inspects
//! incoming responses for a gzip content coding.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::headers::{ACCEPT_ENCODING, CONTENT_ENCODING, GZIP, RequestHeaders, ResponseHeaders};

/// Content-coding preference attached to outgoing requests.
///
/// Doubles as the crate's configuration surface: callers embed it in their
/// own client config and hand it to [`add_compression`] per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMode {
    /// No negotiation is attempted.
    #[default]
    None,
    /// Ask the server for a gzip-compressed body.
    Gzip,
}

impl CompressionMode {
    /// Header value advertised for this mode, if any.
    pub fn header_value(&self) -> Option<&'static str> {
        match self {
            CompressionMode::None => None,
            CompressionMode::Gzip => Some(GZIP),
        }
    }
}

/// Attaches the negotiation preference for `mode` to `request`.
///
/// Returns the same borrow so calls can be chained. `CompressionMode::None`
/// leaves the request untouched.
pub fn add_compression<R: RequestHeaders>(request: &mut R, mode: CompressionMode) -> &mut R {
    if let Some(value) = mode.header_value() {
        request.set_header(ACCEPT_ENCODING, value);
        debug!("Advertising {}: {}", ACCEPT_ENCODING, value);
    }
    request
}

/// Reports whether `response` carries a gzip-compressed body.
///
/// The check is a case-sensitive substring match on `Content-Encoding`, so
/// compound values such as `gzip, identity` count as compressed.
pub fn is_compressed<R: ResponseHeaders>(response: &R) -> bool {
    match response.header(CONTENT_ENCODING) {
        Some(encoding) if !encoding.is_empty() => encoding.contains(GZIP),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(headers: &[(&str, &str)]) -> HashMap<String, String> {
        headers
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_gzip_mode_sets_accept_encoding() {
        let mut request: HashMap<String, String> = HashMap::new();
        add_compression(&mut request, CompressionMode::Gzip);

        assert_eq!(request.get(ACCEPT_ENCODING).map(String::as_str), Some(GZIP));
    }

    #[test]
    fn test_none_mode_leaves_request_untouched() {
        let mut request: HashMap<String, String> = HashMap::new();
        add_compression(&mut request, CompressionMode::None);

        assert!(request.is_empty());
    }

    #[test]
    fn test_gzip_content_encoding_is_compressed() {
        assert!(is_compressed(&response(&[(CONTENT_ENCODING, "gzip")])));
    }

    #[test]
    fn test_compound_encoding_counts_as_compressed() {
        assert!(is_compressed(&response(&[(CONTENT_ENCODING, "gzip, identity")])));
    }

    #[test]
    fn test_missing_header_is_not_compressed() {
        assert!(!is_compressed(&response(&[])));
    }

    #[test]
    fn test_unknown_encoding_is_not_compressed() {
        assert!(!is_compressed(&response(&[(CONTENT_ENCODING, "unknown")])));
    }

    #[test]
    fn test_empty_encoding_is_not_compressed() {
        assert!(!is_compressed(&response(&[(CONTENT_ENCODING, "")])));
    }

    #[test]
    fn test_detection_is_case_sensitive() {
        assert!(!is_compressed(&response(&[(CONTENT_ENCODING, "GZIP")])));
    }

    #[test]
    fn test_mode_round_trips_through_serde() {
        let mode: CompressionMode = serde_json::from_str("\"gzip\"").unwrap();
        assert_eq!(mode, CompressionMode::Gzip);

        let serialized = serde_json::to_string(&CompressionMode::None).unwrap();
        assert_eq!(serialized, "\"none\"");
    }
}
