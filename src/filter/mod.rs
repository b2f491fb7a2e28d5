//! The chunk pipeline the container format invokes once the filter is
//! installed: shuffle, compress and frame on the write path, the reverse on
//! the read path.
//!
//! Chunks are framed with the 16-byte Blosc1 header and carry a single
//! compressed block. Incompressible data (and any selection without a native
//! backend) is stored verbatim with the `MEMCPYED` flag, which every Blosc
//! reader accepts.

pub mod codec;
pub mod shuffle;

use tracing::trace;

use crate::error::ChunkError;
use crate::include::blosc::*;
use crate::params::{Compressor, FilterParams, Shuffle};

/// Parsed view of the 16-byte chunk header.
///
/// Layout: version, lz-version, flags, typesize, then `nbytes`, `blocksize`
/// and `cbytes` as little-endian `u32`. Bits 5-7 of `flags` carry the
/// compressor format code; `cbytes` counts the header itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChunkHeader {
    version: u8,
    flags: u8,
    typesize: usize,
    nbytes: usize,
    blocksize: usize,
    cbytes: usize,
}

impl ChunkHeader {
    fn pack(&self) -> [u8; BLOSC_MIN_HEADER_LENGTH] {
        let mut header = [0u8; BLOSC_MIN_HEADER_LENGTH];
        header[0] = self.version;
        header[1] = BLOSCLZ_VERSION_FORMAT;
        header[2] = self.flags;
        header[3] = self.typesize as u8;
        header[4..8].copy_from_slice(&(self.nbytes as u32).to_le_bytes());
        header[8..12].copy_from_slice(&(self.blocksize as u32).to_le_bytes());
        header[12..16].copy_from_slice(&(self.cbytes as u32).to_le_bytes());
        header
    }

    fn parse(chunk: &[u8]) -> Result<Self, ChunkError> {
        if chunk.len() < BLOSC_MIN_HEADER_LENGTH {
            return Err(ChunkError::TruncatedHeader(BLOSC_MIN_HEADER_LENGTH));
        }
        let version = chunk[0];
        if version == 0 || version > BLOSC_VERSION_FORMAT {
            return Err(ChunkError::BadHeader("unsupported chunk format version"));
        }
        let typesize = match chunk[3] as usize {
            0 => 1,
            ts => ts,
        };
        Ok(ChunkHeader {
            version,
            flags: chunk[2],
            typesize,
            nbytes: u32::from_le_bytes(chunk[4..8].try_into().unwrap()) as usize,
            blocksize: u32::from_le_bytes(chunk[8..12].try_into().unwrap()) as usize,
            cbytes: u32::from_le_bytes(chunk[12..16].try_into().unwrap()) as usize,
        })
    }
}

fn compressor_from_format(code: u8) -> Result<Compressor, ChunkError> {
    // LZ4 and LZ4HC share a stored format, so the code maps back to LZ4.
    match code {
        BLOSC_BLOSCLZ_FORMAT => Ok(Compressor::BloscLz),
        BLOSC_LZ4_FORMAT => Ok(Compressor::Lz4),
        BLOSC_SNAPPY_FORMAT => Ok(Compressor::Snappy),
        BLOSC_ZLIB_FORMAT => Ok(Compressor::Zlib),
        BLOSC_ZSTD_FORMAT => Ok(Compressor::Zstd),
        _ => Err(ChunkError::BadHeader("unknown compressor format code")),
    }
}

fn apply_shuffle(shuffle: Shuffle, typesize: usize, src: &[u8]) -> Option<Vec<u8>> {
    match shuffle {
        Shuffle::None => None,
        Shuffle::Byte => {
            let mut dest = vec![0u8; src.len()];
            shuffle::byte_shuffle(typesize, src, &mut dest);
            Some(dest)
        }
        Shuffle::Bit => {
            let mut dest = vec![0u8; src.len()];
            shuffle::bit_shuffle(typesize, src, &mut dest);
            Some(dest)
        }
    }
}

/// Compresses one chunk on the write path.
///
/// `typesize` is the dataset element width in bytes, as the container format
/// reports it; widths outside `1..=`[`BLOSC_MAX_TYPESIZE`] are treated as a
/// raw byte stream. A `clevel` of 0 stores the chunk without compression.
pub fn compress_chunk(
    params: &FilterParams,
    typesize: usize,
    src: &[u8],
) -> Result<Vec<u8>, ChunkError> {
    let nbytes = src.len();
    if nbytes > u32::MAX as usize - BLOSC_MAX_OVERHEAD {
        return Err(ChunkError::Oversized(nbytes));
    }
    let typesize = if typesize == 0 || typesize > BLOSC_MAX_TYPESIZE {
        1
    } else {
        typesize
    };

    let mut flags = params.compressor.format_code() << 5;
    let mut payload: Option<Vec<u8>> = None;

    if params.clevel > 0 && nbytes > 0 {
        let shuffled = apply_shuffle(params.shuffle, typesize, src);
        let filtered = shuffled.as_deref().unwrap_or(src);
        if let Some(compressed) = codec::try_compress(params.compressor, params.clevel, filtered)? {
            if compressed.len() < nbytes {
                flags |= match params.shuffle {
                    Shuffle::None => 0,
                    Shuffle::Byte => BLOSC_DOSHUFFLE,
                    Shuffle::Bit => BLOSC_DOBITSHUFFLE,
                };
                payload = Some(compressed);
            }
        }
    }

    // Stored chunks keep the original bytes, so no shuffle flag applies.
    let payload = match payload {
        Some(compressed) => compressed,
        None => {
            flags = (flags & !(BLOSC_DOSHUFFLE | BLOSC_DOBITSHUFFLE)) | BLOSC_MEMCPYED;
            src.to_vec()
        }
    };

    let cbytes = BLOSC_MIN_HEADER_LENGTH + payload.len();
    let header = ChunkHeader {
        version: BLOSC_VERSION_FORMAT,
        flags,
        typesize,
        nbytes,
        blocksize: nbytes,
        cbytes,
    };

    trace!(nbytes, cbytes, compressor = ?params.compressor, "compressed chunk");

    let mut chunk = Vec::with_capacity(cbytes);
    chunk.extend_from_slice(&header.pack());
    chunk.extend_from_slice(&payload);
    Ok(chunk)
}

/// Entry point shaped like the container format's filter callback.
///
/// `cd_values` is the parameter block the format persisted with the dataset
/// and hands back verbatim; the element width comes from reserved slot 2,
/// where the format records it at dataset-creation time (zero when it never
/// did, which degrades to a raw byte stream). `flags` with
/// [`H5Z_FLAG_REVERSE`](crate::include::blosc_filter::H5Z_FLAG_REVERSE) set
/// selects the read path.
pub fn apply(cd_values: &[u32], flags: u32, chunk: &[u8]) -> Result<Vec<u8>, ChunkError> {
    let params = FilterParams::from_cd_values(cd_values)?;
    if flags & crate::include::blosc_filter::H5Z_FLAG_REVERSE != 0 {
        decompress_chunk(chunk)
    } else {
        let typesize = params.reserved()[2] as usize;
        compress_chunk(&params, typesize, chunk)
    }
}

/// Decompresses one chunk on the read path, reversing compression and any
/// shuffle recorded in the header flags.
pub fn decompress_chunk(chunk: &[u8]) -> Result<Vec<u8>, ChunkError> {
    let header = ChunkHeader::parse(chunk)?;
    if header.cbytes < BLOSC_MIN_HEADER_LENGTH {
        return Err(ChunkError::BadHeader("cbytes smaller than the header"));
    }
    if header.cbytes > chunk.len() {
        return Err(ChunkError::TruncatedPayload {
            declared: header.cbytes,
            actual: chunk.len(),
        });
    }
    let payload = &chunk[BLOSC_MIN_HEADER_LENGTH..header.cbytes];

    if header.flags & BLOSC_MEMCPYED != 0 {
        if payload.len() != header.nbytes {
            return Err(ChunkError::LengthMismatch {
                expected: header.nbytes,
                got: payload.len(),
            });
        }
        return Ok(payload.to_vec());
    }

    if header.blocksize != header.nbytes {
        return Err(ChunkError::BadHeader("multi-block chunks are not supported"));
    }

    let compressor = compressor_from_format(header.flags >> 5)?;
    let mut decompressed = vec![0u8; header.nbytes];
    codec::decompress_into(compressor, payload, &mut decompressed)?;

    trace!(nbytes = header.nbytes, cbytes = header.cbytes, ?compressor, "decompressed chunk");

    if header.flags & BLOSC_DOSHUFFLE != 0 {
        let mut unshuffled = vec![0u8; header.nbytes];
        shuffle::byte_unshuffle(header.typesize, &decompressed, &mut unshuffled);
        Ok(unshuffled)
    } else if header.flags & BLOSC_DOBITSHUFFLE != 0 {
        let mut unshuffled = vec![0u8; header.nbytes];
        shuffle::bit_unshuffle(header.typesize, &decompressed, &mut unshuffled);
        Ok(unshuffled)
    } else {
        Ok(decompressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_roundtrip() {
        let header = ChunkHeader {
            version: BLOSC_VERSION_FORMAT,
            flags: BLOSC_DOSHUFFLE | (BLOSC_ZSTD_FORMAT << 5),
            typesize: 8,
            nbytes: 4096,
            blocksize: 4096,
            cbytes: 1234,
        };
        let packed = header.pack();
        assert_eq!(ChunkHeader::parse(&packed).unwrap(), header);
    }

    #[test]
    fn parse_rejects_short_and_versionless_chunks() {
        assert!(matches!(
            ChunkHeader::parse(&[0u8; 4]),
            Err(ChunkError::TruncatedHeader(_))
        ));
        let mut zeroed = [0u8; BLOSC_MIN_HEADER_LENGTH];
        assert!(matches!(
            ChunkHeader::parse(&zeroed),
            Err(ChunkError::BadHeader(_))
        ));
        zeroed[0] = BLOSC_VERSION_FORMAT + 1;
        assert!(matches!(
            ChunkHeader::parse(&zeroed),
            Err(ChunkError::BadHeader(_))
        ));
    }

    #[test]
    fn typesize_zero_reads_as_raw_byte_stream() {
        let mut header = ChunkHeader {
            version: BLOSC_VERSION_FORMAT,
            flags: BLOSC_MEMCPYED,
            typesize: 1,
            nbytes: 0,
            blocksize: 0,
            cbytes: BLOSC_MIN_HEADER_LENGTH,
        }
        .pack();
        header[3] = 0;
        assert_eq!(ChunkHeader::parse(&header).unwrap().typesize, 1);
    }
}
