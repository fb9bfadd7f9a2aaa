//! Host hardware probing and snapshot types.
//!
//! # Modules
//!
//! - [`gpu`] - Dedicated GPU detection and vendor classification
//! - [`probe`] - Reads a [`SystemSnapshot`] from the running host
//! - [`snapshot`] - Typed, string-encoded and parsed snapshot forms

pub mod gpu;
pub mod probe;
pub mod snapshot;

pub use gpu::{GpuInfo, GpuVendor};
pub use probe::{default_disk_path, SpecProbe};
pub use snapshot::{
    parse_core_count, parse_gigabytes, FieldParseError, GpuStatus, HostReading, RawSnapshot,
    SnapshotField, SystemSnapshot, NO_DEDICATED_GPU, NO_DEDICATED_GPU_FOUND,
};
