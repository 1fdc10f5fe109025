//! Gzip body decoding
//!
//! Wraps a response body stream in a lazily-inflating gzip reader. Framing is
//! validated up front so a non-gzip body fails at wrap time instead of on the
//! first read.

use std::io::{self, Chain, Cursor, Read};

use bytes::Bytes;
use flate2::read::GzDecoder;
use tracing::error;

use crate::error::{DecodeError, Result};

/// Gzip member header magic number (RFC 1952 § 2.3.1)
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Lazily-decompressing reader over a gzip-encoded body stream.
///
/// Single forward pass, finite with the underlying stream, not restartable.
/// The wrapper owns the underlying stream; dropping it drops the stream too,
/// so callers close both through the one handle.
#[derive(Debug)]
pub struct GzipStream<R: Read> {
    inner: GzDecoder<Chain<Cursor<[u8; 2]>, R>>,
}

/// Wraps `stream` in a decoder for its gzip-framed contents.
///
/// The stream must begin with the gzip magic number; anything else fails
/// immediately with [`DecodeError::CorruptHeader`] and must be treated as
/// fatal for that response. Callers decide whether to invoke this at all via
/// [`crate::negotiate::is_compressed`].
pub fn decompressed_stream<R: Read>(mut stream: R) -> Result<GzipStream<R>> {
    let mut magic = [0u8; 2];
    stream.read_exact(&mut magic).map_err(|e| {
        error!("Unable to read gzip header from response body: {}", e);
        DecodeError::Io(e)
    })?;

    if magic != GZIP_MAGIC {
        error!("Response body is not in gzip format: found {:02x?}", magic);
        return Err(DecodeError::CorruptHeader { found: magic });
    }

    // Hand the consumed magic bytes back so the decoder sees the full member.
    let restored = Cursor::new(magic).chain(stream);

    Ok(GzipStream {
        inner: GzDecoder::new(restored),
    })
}

impl<R: Read> GzipStream<R> {
    /// Drains the decoder and returns the decompressed body.
    pub fn into_bytes(mut self) -> Result<Bytes> {
        let mut body = Vec::new();
        self.inner.read_to_end(&mut body)?;

        Ok(Bytes::from(body))
    }
}

impl<R: Read> Read for GzipStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}
