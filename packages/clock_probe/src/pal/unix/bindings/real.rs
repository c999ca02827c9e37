use std::{io, mem};

use libc::{CLOCK_MONOTONIC, timespec};

use crate::pal::unix::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    /// Reads `CLOCK_MONOTONIC`, the highest-resolution clock source that is guaranteed
    /// never to move backward within the process, unaffected by wall-clock adjustments.
    fn clock_gettime_monotonic(&self) -> io::Result<timespec> {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut ts: timespec = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::clock_gettime(CLOCK_MONOTONIC, &raw mut ts) };

        if result != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(ts)
    }
}
