use crate::pal::{Platform, PlatformFacade, TimeSource, TimeSourceFacade};
use crate::{Result, TimeReading};

/// A handle to the operating system's high-resolution monotonic clock.
///
/// The clock holds no mutable state: each [`sample`](Clock::sample) is an independent
/// read of the OS clock primitive, so a single `Clock` may be shared freely across
/// threads and sampled concurrently without locking.
///
/// The monotonic source means successive readings within a process never decrease under
/// the lexicographic `(seconds, nanoseconds)` ordering of [`TimeReading`]. The trade-off
/// is that `seconds` counts from an arbitrary per-process-stable epoch rather than from
/// the Unix epoch; see [`TimeReading`] for details.
#[derive(Debug)]
pub struct Clock {
    inner: TimeSourceFacade,
}

impl Clock {
    /// Creates a clock backed by the build target's native time source.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pal(&PlatformFacade::real())
    }

    pub(crate) fn from_pal(pal: &PlatformFacade) -> Self {
        Self {
            inner: pal.new_time_source(),
        }
    }

    /// Reads the clock once.
    ///
    /// The returned reading always satisfies `nanoseconds <= 999_999_999`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockUnavailable`](crate::Error::ClockUnavailable) if the OS
    /// clock primitive reports a failure. The read is not retried and no fallback clock
    /// source is substituted.
    pub fn sample(&self) -> Result<TimeReading> {
        self.inner.sample()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
