// Corresponds to hdf5-blosc/src/blosc_filter.h plus the HDF5 public
// constants the filter references.

/// Filter id assigned to Blosc by the HDF Group filter registry.
///
/// This value is baked into every file written with the filter and must match
/// across all writers and readers; it is fixed by convention, never generated.
pub const FILTER_BLOSC: u32 = 32001;

/// Revision of the filter's parameter-block layout.
pub const FILTER_BLOSC_VERSION: u32 = 2;

/// Install the filter as optional: readers lacking it still get the raw,
/// undecoded chunks back instead of a hard failure.
pub const H5Z_FLAG_OPTIONAL: u32 = 0x0001;

/// Set in the flags of a filter invocation on the read path.
pub const H5Z_FLAG_REVERSE: u32 = 0x0100;

/// Number of `cd_values` slots the filter declares when installed.
///
/// Load-bearing: the container format persists exactly this many values with
/// each dataset and hands them back verbatim on every chunk invocation.
pub const BLOSC_FILTER_CD_NVALUES: usize = 7;

/// Status returned by the native registration entry point on success.
pub const BLOSC_FILTER_REGISTER_OK: i32 = 1;
