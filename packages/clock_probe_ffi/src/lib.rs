//! C ABI bridge exposing the [`clock_probe`] sampler to foreign runtimes.
//!
//! Managed runtimes load this library through their foreign-function facility and
//! resolve the exported symbols by name. Each entry point performs one complete
//! request/response cycle: sample the monotonic clock, marshal the raw reading into the
//! fixed-layout [`TimeSpec`] record, hand it back. No state persists between calls, so
//! every export is reentrant and safe to invoke concurrently from any number of threads.
//!
//! # Boundary contract
//!
//! The caller-side declared type for [`TimeSpec`] must match exactly: two fields, in
//! order, `seconds` as a signed 64-bit integer followed by `nanoseconds` as an unsigned
//! 32-bit integer. A mismatch is a caller-side binary-compatibility defect that this
//! library cannot detect.
//!
//! The C ABI has no exceptions, so failures travel as [`SampleStatus`] codes next to an
//! out-value. A non-[`Ok`](SampleStatus::Ok) status means no reading was produced; the
//! bridge never substitutes a default or stale value for a failed clock read.

mod gettime;
mod timespec;

pub use gettime::*;
pub use timespec::*;
