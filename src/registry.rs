//! The seam between this crate and the container format's filter machinery.
//!
//! The filter registry is process-wide state owned by the container format,
//! never by this crate. It is reached through an explicit service trait so
//! the protocol layer stays testable against a fake and an FFI-backed
//! implementation can be swapped in without touching the callers.

/// Raw reply of the native registration entry point.
///
/// An FFI-backed implementation copies the callee-allocated version and date
/// strings into owned `String`s and releases the originals exactly once, on
/// the success and failure paths alike, before returning this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Status code as reported by the registry.
    /// [`BLOSC_FILTER_REGISTER_OK`](crate::include::blosc_filter::BLOSC_FILTER_REGISTER_OK)
    /// is the single success sentinel.
    pub status: i32,
    /// Version string of the linked codec library. May be empty on failure.
    pub version: String,
    /// Build date string of the linked codec library. May be empty on failure.
    pub date: String,
}

/// The two operations this crate needs from the container format.
///
/// `register_filter` mutates the process-wide filter table; its idempotence
/// under repeated or concurrent calls is whatever the underlying registry
/// guarantees. `install_filter` mutates only the pipeline handle passed in;
/// concurrent installs on the same handle must be serialized by the caller.
pub trait FilterRegistry {
    /// Per-dataset creation configuration the filter gets installed on.
    /// Opaque to this crate; owned by the container format.
    type Pipeline;

    /// Registers the filter implementation under its fixed id.
    fn register_filter(&self) -> Registration;

    /// Attaches filter `filter_id` to `pipeline` with the given execution
    /// flags and parameter block. Returns 0 on success; any other value is a
    /// failure status surfaced verbatim to the caller.
    fn install_filter(
        &self,
        pipeline: &mut Self::Pipeline,
        filter_id: u32,
        flags: u32,
        cd_values: &[u32],
    ) -> i32;
}
