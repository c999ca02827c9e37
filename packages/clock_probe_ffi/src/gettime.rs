use std::alloc::{self, Layout};

use clock_probe::Clock;

use crate::{SampleStatus, TimeSpec};

/// Samples the monotonic clock once and writes the reading to `out`.
///
/// Returns [`SampleStatus::Ok`] on success. On failure a non-zero status is returned and
/// `out` is left untouched; no default or stale reading is ever written.
///
/// # Safety
///
/// `out` must be non-null, properly aligned and valid for a write of [`TimeSpec`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clock_probe_gettime(out: *mut TimeSpec) -> SampleStatus {
    debug_assert!(!out.is_null());

    match sample() {
        Ok(spec) => {
            // SAFETY: The caller promises `out` is valid for a write of `TimeSpec`.
            unsafe { out.write(spec) };
            SampleStatus::Ok
        }
        Err(status) => status,
    }
}

/// Samples the monotonic clock once into a callee-allocated record and writes its
/// address to `out`.
///
/// For callers whose foreign-function facility expects the native side to own the
/// record's storage. The record must be released with [`clock_probe_timespec_free`].
/// On failure a non-zero status is returned and `out` is left untouched; a failed
/// allocation is reported as [`SampleStatus::AllocationFailure`], distinct from a failed
/// clock read.
///
/// # Safety
///
/// `out` must be non-null, properly aligned and valid for a write of a pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clock_probe_gettime_boxed(out: *mut *mut TimeSpec) -> SampleStatus {
    debug_assert!(!out.is_null());

    let spec = match sample() {
        Ok(spec) => spec,
        Err(status) => return status,
    };

    let layout = Layout::new::<TimeSpec>();

    // SAFETY: `TimeSpec` is not zero-sized, so the layout is valid for allocation.
    let reading = unsafe { alloc::alloc(layout) }.cast::<TimeSpec>();

    if reading.is_null() {
        return SampleStatus::AllocationFailure;
    }

    // SAFETY: `reading` was just allocated with the layout of `TimeSpec`.
    unsafe { reading.write(spec) };

    // SAFETY: The caller promises `out` is valid for a pointer write.
    unsafe { out.write(reading) };

    SampleStatus::Ok
}

/// Releases a record obtained from [`clock_probe_gettime_boxed`].
///
/// Passing null is a no-op.
///
/// # Safety
///
/// `reading` must be null or a pointer previously returned by
/// [`clock_probe_gettime_boxed`] that has not already been freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clock_probe_timespec_free(reading: *mut TimeSpec) {
    if reading.is_null() {
        return;
    }

    // SAFETY: Per the contract above, `reading` came from `clock_probe_gettime_boxed`,
    // which allocated it with exactly this layout.
    unsafe { alloc::dealloc(reading.cast(), Layout::new::<TimeSpec>()) };
}

/// One complete request/response cycle: construct the (zero-sized) clock, sample it,
/// marshal the reading. Nothing is retained between calls.
fn sample() -> Result<TimeSpec, SampleStatus> {
    let clock = Clock::new();

    match clock.sample() {
        Ok(reading) => Ok(reading.into()),
        Err(error) => Err(SampleStatus::from(&error)),
    }
}

#[cfg(test)]
mod tests {
    use std::mem::MaybeUninit;
    use std::ptr;

    use super::*;

    #[test]
    fn gettime_writes_a_valid_reading() {
        let mut out = MaybeUninit::<TimeSpec>::uninit();

        // SAFETY: `out` is a valid, aligned location for a `TimeSpec` write.
        let status = unsafe { clock_probe_gettime(out.as_mut_ptr()) };
        assert_eq!(status, SampleStatus::Ok);

        // SAFETY: A status of `Ok` means the out-value was written.
        let spec = unsafe { out.assume_init() };
        assert!(spec.nanoseconds <= 999_999_999);
    }

    #[test]
    fn gettime_readings_never_decrease() {
        let mut first = MaybeUninit::<TimeSpec>::uninit();
        let mut second = MaybeUninit::<TimeSpec>::uninit();

        // SAFETY: Both locations are valid, aligned `TimeSpec` destinations.
        let status_a = unsafe { clock_probe_gettime(first.as_mut_ptr()) };
        // SAFETY: As above.
        let status_b = unsafe { clock_probe_gettime(second.as_mut_ptr()) };
        assert_eq!(status_a, SampleStatus::Ok);
        assert_eq!(status_b, SampleStatus::Ok);

        // SAFETY: A status of `Ok` means the out-value was written.
        let first = unsafe { first.assume_init() };
        // SAFETY: As above.
        let second = unsafe { second.assume_init() };
        assert!(second >= first);
    }

    #[test]
    fn boxed_reading_round_trips_and_frees() {
        let mut out = ptr::null_mut::<TimeSpec>();

        // SAFETY: `out` is a valid, aligned location for a pointer write.
        let status = unsafe { clock_probe_gettime_boxed(&raw mut out) };
        assert_eq!(status, SampleStatus::Ok);
        assert!(!out.is_null());

        // SAFETY: A status of `Ok` means `out` points at an initialized record.
        let spec = unsafe { *out };
        assert!(spec.nanoseconds <= 999_999_999);

        // SAFETY: `out` came from `clock_probe_gettime_boxed` and is freed once.
        unsafe { clock_probe_timespec_free(out) };
    }

    #[test]
    fn freeing_null_is_a_no_op() {
        // SAFETY: Null is explicitly permitted.
        unsafe { clock_probe_timespec_free(ptr::null_mut()) };
    }
}
