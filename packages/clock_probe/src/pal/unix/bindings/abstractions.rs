use std::fmt::Debug;
use std::io;

use libc::timespec;

/// Bindings for FFI calls into the operating system.
///
/// All PAL OS calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    fn clock_gettime_monotonic(&self) -> io::Result<timespec>;
}
