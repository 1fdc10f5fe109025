//! Decode error types

use std::io;

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors raised while wrapping a response body for decompression.
///
/// Both variants are fatal for the response they occur on; nothing is
/// recovered internally and no fallback decoding is attempted.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body does not begin with a gzip member header.
    #[error("Not in gzip format: found {found:02x?}")]
    CorruptHeader { found: [u8; 2] },

    /// The underlying stream failed before the framing could be validated.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
