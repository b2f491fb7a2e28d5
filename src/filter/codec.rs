//! Dispatch to the native compression backends by [`Compressor`] selector.

use std::io::{Read, Write};

use crate::error::ChunkError;
use crate::params::Compressor;

/// Compresses `src` with the selected backend.
///
/// Returns `Ok(None)` when no native backend exists for the selection
/// (BloscLZ), in which case the chunk is stored uncompressed; any Blosc
/// reader accepts stored chunks regardless of the selected compressor.
/// LZ4HC shares the LZ4 stored format; `lz4_flex` has no high-compression
/// mode, so the selection falls back to the fast path.
pub(crate) fn try_compress(
    compressor: Compressor,
    clevel: u32,
    src: &[u8],
) -> Result<Option<Vec<u8>>, ChunkError> {
    match compressor {
        Compressor::BloscLz => Ok(None),
        Compressor::Lz4 | Compressor::Lz4hc => Ok(Some(lz4_flex::block::compress(src))),
        Compressor::Snappy => snap::raw::Encoder::new()
            .compress_vec(src)
            .map(Some)
            .map_err(|e| ChunkError::codec("snappy", e)),
        Compressor::Zlib => {
            let level = flate2::Compression::new(clevel.min(9));
            let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), level);
            encoder
                .write_all(src)
                .map_err(|e| ChunkError::codec("zlib", e))?;
            encoder
                .finish()
                .map(Some)
                .map_err(|e| ChunkError::codec("zlib", e))
        }
        Compressor::Zstd => {
            let level = clevel.min(22) as i32;
            zstd::stream::encode_all(src, level)
                .map(Some)
                .map_err(|e| ChunkError::codec("zstd", e))
        }
    }
}

/// Decompresses `src` into `dest`, which must be sized to the exact
/// uncompressed length declared by the chunk header.
pub(crate) fn decompress_into(
    compressor: Compressor,
    src: &[u8],
    dest: &mut [u8],
) -> Result<(), ChunkError> {
    match compressor {
        Compressor::BloscLz => Err(ChunkError::UnsupportedCompressor(compressor)),
        Compressor::Lz4 | Compressor::Lz4hc => {
            let written = lz4_flex::block::decompress_into(src, dest)
                .map_err(|e| ChunkError::codec("lz4", e))?;
            expect_len(dest.len(), written)
        }
        Compressor::Snappy => {
            let written = snap::raw::Decoder::new()
                .decompress(src, dest)
                .map_err(|e| ChunkError::codec("snappy", e))?;
            expect_len(dest.len(), written)
        }
        Compressor::Zlib => {
            let mut decoder = flate2::read::ZlibDecoder::new(src);
            decoder
                .read_exact(dest)
                .map_err(|e| ChunkError::codec("zlib", e))
        }
        Compressor::Zstd => {
            let mut decoder =
                zstd::stream::read::Decoder::new(src).map_err(|e| ChunkError::codec("zstd", e))?;
            decoder
                .read_exact(dest)
                .map_err(|e| ChunkError::codec("zstd", e))
        }
    }
}

fn expect_len(expected: usize, got: usize) -> Result<(), ChunkError> {
    if got == expected {
        Ok(())
    } else {
        Err(ChunkError::LengthMismatch { expected, got })
    }
}
