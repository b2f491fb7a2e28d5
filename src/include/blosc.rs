// Corresponds to c-blosc/blosc/blosc.h

// Version numbers

/// Version string of the Blosc codec family this layer tracks.
pub const BLOSC_VERSION_STRING: &str = "1.21.6";
/// Release date of the tracked Blosc version.
pub const BLOSC_VERSION_DATE: &str = "$Date:: 2024-05-27 #$";

/// Chunk format version written into byte 0 of the chunk header.
pub const BLOSC_VERSION_FORMAT: u8 = 2;
/// Format version of the internal Lempel-Ziv codec, byte 1 of the header.
pub const BLOSCLZ_VERSION_FORMAT: u8 = 1;

// Compressor identifiers. These select the backend at compression time and
// are what slot 6 of the filter parameter block carries.

/// BloscLZ, the default codec of the C library.
pub const BLOSC_BLOSCLZ: u32 = 0;
/// LZ4, fast with moderate ratios.
pub const BLOSC_LZ4: u32 = 1;
/// LZ4HC, the high-compression variant of LZ4 (same stored format).
pub const BLOSC_LZ4HC: u32 = 2;
/// Snappy.
pub const BLOSC_SNAPPY: u32 = 3;
/// Zlib (DEFLATE with zlib framing).
pub const BLOSC_ZLIB: u32 = 4;
/// Zstandard, modern and tunable.
pub const BLOSC_ZSTD: u32 = 5;

// Compressor format codes, stored in bits 5-7 of the chunk-header flags byte.
// LZ4 and LZ4HC produce the same stored format and share a code.

pub const BLOSC_BLOSCLZ_FORMAT: u8 = 0;
pub const BLOSC_LZ4_FORMAT: u8 = 1;
pub const BLOSC_LZ4HC_FORMAT: u8 = 1;
pub const BLOSC_SNAPPY_FORMAT: u8 = 2;
pub const BLOSC_ZLIB_FORMAT: u8 = 3;
pub const BLOSC_ZSTD_FORMAT: u8 = 4;

// Shuffle selectors, what slot 5 of the filter parameter block carries.

/// No pre-compression transform.
pub const BLOSC_NOSHUFFLE: u32 = 0;
/// Byte-wise shuffle across elements.
pub const BLOSC_SHUFFLE: u32 = 1;
/// Bit-wise shuffle across elements.
pub const BLOSC_BITSHUFFLE: u32 = 2;

// Chunk-header flag bits (byte 2 of the header).

/// Byte shuffle was applied before compression.
pub const BLOSC_DOSHUFFLE: u8 = 0x1;
/// Chunk payload is stored uncompressed.
pub const BLOSC_MEMCPYED: u8 = 0x2;
/// Bit shuffle was applied before compression.
pub const BLOSC_DOBITSHUFFLE: u8 = 0x4;

/// Chunk header length in bytes.
pub const BLOSC_MIN_HEADER_LENGTH: usize = 16;

/// Maximum framing overhead added to a compressed chunk.
///
/// Allocate at least `src.len() + BLOSC_MAX_OVERHEAD` for the destination.
pub const BLOSC_MAX_OVERHEAD: usize = BLOSC_MIN_HEADER_LENGTH;

/// Maximum typesize in bytes before the source is treated as a raw byte stream.
pub const BLOSC_MAX_TYPESIZE: usize = 255;
