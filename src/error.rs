use crate::include::blosc_filter::BLOSC_FILTER_CD_NVALUES;
use crate::params::Compressor;

/// Errors from the registration and configuration protocol.
///
/// Status-carrying variants keep the raw code returned by the container
/// format so callers can distinguish failure modes the underlying library
/// distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("blosc filter failed to register (status {status})")]
    Register { status: i32 },

    #[error("failed to install blosc filter on the pipeline (status {status})")]
    Install { status: i32 },

    #[error("expected {BLOSC_FILTER_CD_NVALUES} filter parameters, got {0}")]
    BadParamCount(usize),

    #[error("unknown compressor id {0} in filter parameters")]
    UnknownCompressor(u32),

    #[error("unknown shuffle mode {0} in filter parameters")]
    UnknownShuffle(u32),
}

/// Errors from the per-chunk compression pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    #[error("chunk is shorter than the {0}-byte header")]
    TruncatedHeader(usize),

    #[error("chunk header declares {declared} compressed bytes but {actual} are present")]
    TruncatedPayload { declared: usize, actual: usize },

    #[error("chunk header is inconsistent: {0}")]
    BadHeader(&'static str),

    #[error("no native backend for {0:?}; only stored chunks can be decoded")]
    UnsupportedCompressor(Compressor),

    #[error("invalid filter parameters: {0}")]
    BadParams(#[from] FilterError),

    #[error("{codec} backend failed: {reason}")]
    Codec { codec: &'static str, reason: String },

    #[error("decompressed {got} bytes, chunk header declared {expected}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("chunk of {0} bytes exceeds the format's 32-bit size limit")]
    Oversized(usize),
}

impl ChunkError {
    pub(crate) fn codec(codec: &'static str, err: impl std::fmt::Display) -> Self {
        ChunkError::Codec {
            codec,
            reason: err.to_string(),
        }
    }
}
