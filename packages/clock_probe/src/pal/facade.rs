mod platform;
mod time_source;

pub(crate) use platform::*;
pub(crate) use time_source::*;
