use std::fmt::Debug;

use crate::{Result, TimeReading};

pub(crate) trait Platform: Debug + Send + Sync + 'static {
    type TimeSource: TimeSource;

    fn new_time_source(&self) -> Self::TimeSource;
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait TimeSource: Debug + Send + Sync {
    fn sample(&self) -> Result<TimeReading>;
}
