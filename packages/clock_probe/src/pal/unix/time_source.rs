use std::io;

use crate::pal::TimeSource;
use crate::pal::unix::{Bindings, BindingsFacade};
use crate::{Error, Result, TimeReading};

#[derive(Clone, Debug)]
pub(crate) struct TimeSourceImpl {
    bindings: BindingsFacade,
}

impl TimeSourceImpl {
    pub(crate) fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }
}

impl TimeSource for TimeSourceImpl {
    fn sample(&self) -> Result<TimeReading> {
        let ts = self
            .bindings
            .clock_gettime_monotonic()
            .map_err(|source| Error::ClockUnavailable { source })?;

        // A successful clock_gettime guarantees tv_nsec is in [0, 999_999_999].
        // A value outside that range means the clock primitive itself is broken,
        // which is the same condition as a failed read.
        let nanoseconds = u32::try_from(ts.tv_nsec)
            .ok()
            .filter(|&ns| ns <= TimeReading::MAX_NANOSECONDS)
            .ok_or_else(|| Error::ClockUnavailable {
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    "clock reported an out-of-range nanosecond remainder",
                ),
            })?;

        Ok(TimeReading::new(i64::from(ts.tv_sec), nanoseconds))
    }
}
