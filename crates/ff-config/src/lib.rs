//! ff-config: per-instance tracker options and `FF_*` environment tunables.

pub mod options;
pub mod tunables;

pub use options::Options;
