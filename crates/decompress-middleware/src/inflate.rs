//! Buffered gzip decoding

use bytes::Bytes;
use flate2::read::GzDecoder;
use std::io::Read;

/// Decompression failure kinds
///
/// These are the only two ways decoding can fail: the gzip container is
/// rejected while parsing its header, or the deflate payload breaks after a
/// valid header.
#[derive(Debug, thiserror::Error)]
pub enum InflateError {
    /// The input is not a gzip stream (bad magic bytes or malformed header)
    #[error("invalid gzip header: {0}")]
    InvalidHeader(#[source] std::io::Error),

    /// The compressed payload is corrupt or truncated
    #[error("corrupt or truncated gzip stream: {0}")]
    Truncated(#[source] std::io::Error),
}

/// Decompress a gzip-encoded buffer fully into memory
///
/// The decoder is request-local and dropped on every exit path.
pub fn inflate(data: &[u8]) -> Result<Bytes, InflateError> {
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();

    match decoder.read_to_end(&mut decompressed) {
        Ok(_) => Ok(Bytes::from(decompressed)),
        // The gzip header is parsed lazily on the first read; if it is still
        // unavailable after a failed read, the container itself was rejected.
        Err(e) if decoder.header().is_none() => Err(InflateError::InvalidHeader(e)),
        Err(e) => Err(InflateError::Truncated(e)),
    }
}
