use std::fmt::Debug;
use std::io;

/// Bindings for FFI calls into the operating system.
///
/// All PAL OS calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    fn query_performance_counter(&self) -> io::Result<i64>;

    fn query_performance_frequency(&self) -> io::Result<i64>;
}
