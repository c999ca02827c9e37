use std::io;

use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

use crate::pal::windows::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    fn query_performance_counter(&self) -> io::Result<i64> {
        let mut ticks = 0_i64;

        // SAFETY: We are passing a valid pointer to receive the counter value.
        unsafe { QueryPerformanceCounter(&mut ticks) }.map_err(io::Error::other)?;

        Ok(ticks)
    }

    fn query_performance_frequency(&self) -> io::Result<i64> {
        let mut frequency = 0_i64;

        // SAFETY: We are passing a valid pointer to receive the frequency value.
        unsafe { QueryPerformanceFrequency(&mut frequency) }.map_err(io::Error::other)?;

        Ok(frequency)
    }
}
