//! Registration and per-dataset configuration of the Blosc filter.

use tracing::trace;

use crate::error::FilterError;
use crate::include::blosc_filter::{
    BLOSC_FILTER_REGISTER_OK, FILTER_BLOSC, H5Z_FLAG_OPTIONAL,
};
use crate::params::{Compressor, FilterParams, Shuffle};
use crate::registry::FilterRegistry;

/// Identity metadata reported by a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloscVersion {
    /// Version of the linked codec library, e.g. `"1.21.6"`.
    pub version: String,
    /// Build/release date of the linked codec library.
    pub date: String,
}

/// Registers the Blosc filter with the container format's filter registry.
///
/// Once this returns `Ok`, the registration is visible to every subsequent
/// [`configure_blosc_filter`] call in the process; the registry owns its
/// lifetime from there. The call is a thin pass-through with no local
/// "already registered" bookkeeping, so calling it again behaves however the
/// underlying registry behaves.
///
/// Must complete before any dataset written with the filter is read back;
/// that ordering is the caller's contract, not enforced here.
pub fn register_blosc<R: FilterRegistry>(registry: &R) -> Result<BloscVersion, FilterError> {
    let reply = registry.register_filter();
    if reply.status != BLOSC_FILTER_REGISTER_OK {
        return Err(FilterError::Register {
            status: reply.status,
        });
    }
    trace!(version = %reply.version, date = %reply.date, "registered blosc filter");
    Ok(BloscVersion {
        version: reply.version,
        date: reply.date,
    })
}

/// Installs the Blosc filter on one dataset's storage pipeline.
///
/// Encodes `(compressor, clevel, shuffle)` into the 7-slot parameter block
/// (slots 0-3 left to the container format) and installs it under
/// [`FILTER_BLOSC`] with [`H5Z_FLAG_OPTIONAL`], so files stay readable as raw
/// chunks by readers that lack the filter.
///
/// `clevel` is passed through unvalidated; the backend clamps or rejects it
/// at compression time. A non-zero install status is surfaced unmodified in
/// the error and leaves the pipeline without the filter.
pub fn configure_blosc_filter<R: FilterRegistry>(
    registry: &R,
    pipeline: &mut R::Pipeline,
    compressor: Compressor,
    clevel: i32,
    shuffle: Shuffle,
) -> Result<(), FilterError> {
    let params = FilterParams::new(compressor, clevel, shuffle);
    let cd_values = params.to_cd_values();

    let status = registry.install_filter(pipeline, FILTER_BLOSC, H5Z_FLAG_OPTIONAL, &cd_values);
    if status != 0 {
        return Err(FilterError::Install { status });
    }
    trace!(?compressor, clevel, ?shuffle, "installed blosc filter on pipeline");
    Ok(())
}
