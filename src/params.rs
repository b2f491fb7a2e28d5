//! The filter parameter block and the selector enumerations it carries.
//!
//! The 7-slot `cd_values` layout is the binary compatibility surface of this
//! crate: once installed on a pipeline it is persisted into the file's
//! per-dataset filter metadata and handed back verbatim to every reader, so
//! the slot meanings and the selector numbering can never change.

use crate::error::FilterError;
use crate::include::blosc::*;
use crate::include::blosc_filter::BLOSC_FILTER_CD_NVALUES;

/// Compression backend selector, slot 6 of the parameter block.
///
/// Discriminants mirror the C library's compressor identifiers exactly; the
/// encoded integer is interpreted later by readers linked against that
/// library, possibly in another process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Compressor {
    BloscLz = BLOSC_BLOSCLZ,
    Lz4 = BLOSC_LZ4,
    Lz4hc = BLOSC_LZ4HC,
    Snappy = BLOSC_SNAPPY,
    Zlib = BLOSC_ZLIB,
    Zstd = BLOSC_ZSTD,
}

impl Compressor {
    /// The wire identifier written into the parameter block.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Format code stored in bits 5-7 of the chunk-header flags byte.
    pub(crate) const fn format_code(self) -> u8 {
        match self {
            Compressor::BloscLz => BLOSC_BLOSCLZ_FORMAT,
            Compressor::Lz4 => BLOSC_LZ4_FORMAT,
            Compressor::Lz4hc => BLOSC_LZ4HC_FORMAT,
            Compressor::Snappy => BLOSC_SNAPPY_FORMAT,
            Compressor::Zlib => BLOSC_ZLIB_FORMAT,
            Compressor::Zstd => BLOSC_ZSTD_FORMAT,
        }
    }
}

impl TryFrom<u32> for Compressor {
    type Error = FilterError;

    fn try_from(id: u32) -> Result<Self, FilterError> {
        match id {
            BLOSC_BLOSCLZ => Ok(Compressor::BloscLz),
            BLOSC_LZ4 => Ok(Compressor::Lz4),
            BLOSC_LZ4HC => Ok(Compressor::Lz4hc),
            BLOSC_SNAPPY => Ok(Compressor::Snappy),
            BLOSC_ZLIB => Ok(Compressor::Zlib),
            BLOSC_ZSTD => Ok(Compressor::Zstd),
            other => Err(FilterError::UnknownCompressor(other)),
        }
    }
}

/// Pre-compression transform selector, slot 5 of the parameter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Shuffle {
    /// No transform.
    None = BLOSC_NOSHUFFLE,
    /// Byte-wise shuffle across elements.
    Byte = BLOSC_SHUFFLE,
    /// Bit-wise shuffle across elements.
    Bit = BLOSC_BITSHUFFLE,
}

impl Shuffle {
    /// The wire identifier written into the parameter block.
    pub const fn id(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Shuffle {
    type Error = FilterError;

    fn try_from(id: u32) -> Result<Self, FilterError> {
        match id {
            BLOSC_NOSHUFFLE => Ok(Shuffle::None),
            BLOSC_SHUFFLE => Ok(Shuffle::Byte),
            BLOSC_BITSHUFFLE => Ok(Shuffle::Bit),
            other => Err(FilterError::UnknownShuffle(other)),
        }
    }
}

/// Structured view of the 7-slot `cd_values` block.
///
/// Slots 0-3 belong to the container format (it fills them in with filter
/// revision, typesize and chunk geometry when the dataset is created); this
/// layer leaves them zeroed on encode and preserves them verbatim on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParams {
    reserved: [u32; 4],
    /// Compression effort, slot 4. Not range-checked here; the backend clamps
    /// or rejects at compression time.
    pub clevel: u32,
    /// Transform selector, slot 5.
    pub shuffle: Shuffle,
    /// Backend selector, slot 6.
    pub compressor: Compressor,
}

impl FilterParams {
    /// Builds a block for a fresh installation. `clevel` is accepted as any
    /// integer and reinterpreted through the unsigned 32-bit wire encoding.
    pub fn new(compressor: Compressor, clevel: i32, shuffle: Shuffle) -> Self {
        FilterParams {
            reserved: [0; 4],
            clevel: clevel as u32,
            shuffle,
            compressor,
        }
    }

    /// The reserved slots 0-3 as last seen on the wire.
    pub fn reserved(&self) -> [u32; 4] {
        self.reserved
    }

    /// Encodes the block in wire order.
    pub fn to_cd_values(&self) -> [u32; BLOSC_FILTER_CD_NVALUES] {
        let mut cd_values = [0u32; BLOSC_FILTER_CD_NVALUES];
        cd_values[..4].copy_from_slice(&self.reserved);
        cd_values[4] = self.clevel;
        cd_values[5] = self.shuffle.id();
        cd_values[6] = self.compressor.id();
        cd_values
    }

    /// Decodes a block handed back by the container format.
    ///
    /// The slot count must be exactly [`BLOSC_FILTER_CD_NVALUES`]; selector
    /// slots must carry known identifiers. Reserved slots round-trip as-is.
    pub fn from_cd_values(cd_values: &[u32]) -> Result<Self, FilterError> {
        if cd_values.len() != BLOSC_FILTER_CD_NVALUES {
            return Err(FilterError::BadParamCount(cd_values.len()));
        }
        let mut reserved = [0u32; 4];
        reserved.copy_from_slice(&cd_values[..4]);
        Ok(FilterParams {
            reserved,
            clevel: cd_values[4],
            shuffle: Shuffle::try_from(cd_values[5])?,
            compressor: Compressor::try_from(cd_values[6])?,
        })
    }
}
