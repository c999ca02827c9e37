use std::io;

use crate::pal::TimeSource;
use crate::pal::windows::{Bindings, BindingsFacade};
use crate::{Error, Result, TimeReading};

const NANOS_PER_SEC: i64 = 1_000_000_000;

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
        let ticks = self
            .bindings
            .query_performance_counter()
            .map_err(|source| Error::ClockUnavailable { source })?;

        // The frequency is fixed at boot, so re-querying it per sample costs one cheap
        // call and keeps the time source entirely stateless.
        let frequency = self
            .bindings
            .query_performance_frequency()
            .map_err(|source| Error::ClockUnavailable { source })?;

        if frequency <= 0 || ticks < 0 {
            return Err(Error::ClockUnavailable {
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    "performance counter returned an out-of-range value",
                ),
            });
        }

        let seconds = ticks / frequency;
        let remainder_ticks = ticks % frequency;

        // remainder_ticks < frequency, so the scaled value is below one second's worth
        // of nanoseconds and always fits in u32.
        let nanoseconds = u32::try_from(
            i128::from(remainder_ticks) * i128::from(NANOS_PER_SEC) / i128::from(frequency),
        )
        .expect("sub-second tick remainder scales to less than one second of nanoseconds");

        Ok(TimeReading::new(seconds, nanoseconds))
    }
}
