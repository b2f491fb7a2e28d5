//! Constants mirrored from the external C headers this layer must stay
//! numerically identical to. Values are pinned here, never re-derived.

pub mod blosc;
pub mod blosc_filter;
