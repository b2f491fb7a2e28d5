//! Blosc filter plugin layer for HDF5-style chunked container formats.
//!
//! Two independent operations share one data model, the 7-slot `cd_values`
//! parameter block:
//!
//! - [`register_blosc`] registers the filter with the container format's
//!   process-wide filter registry (once per process) and reports the linked
//!   codec library's version and build date.
//! - [`configure_blosc_filter`] encodes a compressor, a compression level and
//!   a shuffle selection into the parameter block and installs it on one
//!   dataset's storage pipeline, so the format invokes the filter on every
//!   chunk written to or read from that dataset.
//!
//! The container format is reached through the [`registry::FilterRegistry`]
//! trait; the [`filter`] module implements the per-chunk pipeline the
//! registered filter performs. The [`include`] module pins the numeric
//! constants mirrored from the external C authorities.

pub mod error;
pub mod filter;
pub mod include;
pub mod params;
pub mod plugin;
pub mod registry;

pub use error::{ChunkError, FilterError};
pub use params::{Compressor, FilterParams, Shuffle};
pub use plugin::{configure_blosc_filter, register_blosc, BloscVersion};
pub use registry::{FilterRegistry, Registration};
