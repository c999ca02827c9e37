//! Samples the operating system's highest-resolution monotonic clock with minimal overhead.
//!
//! This crate exists for timing-sensitive callers (latency instrumentation, benchmark
//! harnesses) that want a raw native clock reading without any intermediate time
//! representation. Every sample is a plain `(seconds, nanoseconds)` pair, taken directly
//! from the OS clock primitive.
//!
//! # Key properties
//!
//! - **Monotonic**: readings never move backward within a process, immune to wall-clock
//!   adjustments such as NTP synchronization.
//! - **Stateless**: a [`Clock`] holds no mutable state; sampling is reentrant and safe to
//!   perform concurrently from any number of threads without locking.
//! - **Honest about failure**: if the OS clock primitive reports an error, the sample
//!   fails with [`Error::ClockUnavailable`] instead of substituting a different clock
//!   source or a stale value.
//!
//! # Basic usage
//!
//! ```rust
//! use clock_probe::Clock;
//!
//! # fn main() -> Result<(), clock_probe::Error> {
//! let clock = Clock::new();
//!
//! let start = clock.sample()?;
//!
//! // Do some work...
//! std::thread::sleep(std::time::Duration::from_millis(10));
//!
//! let end = clock.sample()?;
//! assert!(end >= start);
//! # Ok(())
//! # }
//! ```

mod pal;

mod clock;
mod error;
mod reading;

pub use clock::*;
pub use error::*;
pub use reading::*;
