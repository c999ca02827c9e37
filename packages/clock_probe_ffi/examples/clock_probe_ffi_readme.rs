//! Invokes the exported entry points the way a foreign caller would.

use std::mem::MaybeUninit;

use clock_probe_ffi::{SampleStatus, TimeSpec, clock_probe_gettime};

fn main() {
    let mut out = MaybeUninit::<TimeSpec>::uninit();

    // SAFETY: `out` is a valid, aligned location for a `TimeSpec` write.
    let status = unsafe { clock_probe_gettime(out.as_mut_ptr()) };
    assert_eq!(status, SampleStatus::Ok);

    // SAFETY: A status of `Ok` means the out-value was written.
    let spec = unsafe { out.assume_init() };

    println!("gettime -> {}s + {}ns", spec.seconds, spec.nanoseconds);
}
