use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockTimeSource;
use crate::pal::{TimeSource, TimeSourceImpl};
use crate::{Result, TimeReading};

#[derive(Clone)]
pub(crate) enum TimeSourceFacade {
    Real(TimeSourceImpl),

    #[cfg(test)]
    Mock(Arc<MockTimeSource>),
}

impl From<TimeSourceImpl> for TimeSourceFacade {
    fn from(ts: TimeSourceImpl) -> Self {
        Self::Real(ts)
    }
}

#[cfg(test)]
impl From<MockTimeSource> for TimeSourceFacade {
    fn from(ts: MockTimeSource) -> Self {
        Self::Mock(Arc::new(ts))
    }
}

impl TimeSource for TimeSourceFacade {
    fn sample(&self) -> Result<TimeReading> {
        match self {
            Self::Real(ts) => ts.sample(),
            #[cfg(test)]
            Self::Mock(ts) => ts.sample(),
        }
    }
}

impl Debug for TimeSourceFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(ts) => ts.fmt(f),
            #[cfg(test)]
            Self::Mock(ts) => ts.fmt(f),
        }
    }
}
