// Wire-level header constants and header-bag capabilities
pub mod headers;

// Compression negotiation for requests and responses
pub mod negotiate;

// Gzip body decoding
pub mod decode;

// Error types
pub mod error;

// Re-export main types
pub use decode::{GZIP_MAGIC, GzipStream, decompressed_stream};
pub use error::{DecodeError, Result};
pub use negotiate::{CompressionMode, add_compression, is_compressed};

pub mod prelude {
    pub use crate::decode::{GzipStream, decompressed_stream};
    pub use crate::error::{DecodeError, Result};
    pub use crate::headers::{RequestHeaders, ResponseHeaders};
    pub use crate::negotiate::{CompressionMode, add_compression, is_compressed};
}
