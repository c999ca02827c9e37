//! Thread safety integration tests for the exported entry points.
//!
//! Every export is stateless, so concurrent invocation must produce a valid,
//! independent reading for each call with no cross-thread interference.

use std::mem::MaybeUninit;
use std::thread;

use clock_probe_ffi::{SampleStatus, TimeSpec, clock_probe_gettime};

fn gettime() -> TimeSpec {
    let mut out = MaybeUninit::<TimeSpec>::uninit();

    // SAFETY: `out` is a valid, aligned location for a `TimeSpec` write.
    let status = unsafe { clock_probe_gettime(out.as_mut_ptr()) };
    assert_eq!(status, SampleStatus::Ok);

    // SAFETY: A status of `Ok` means the out-value was written.
    unsafe { out.assume_init() }
}

#[test]
fn concurrent_calls_each_get_a_valid_reading() {
    const THREADS: usize = 16;
    const CALLS_PER_THREAD: usize = 1_000;

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(|| {
                let mut previous = gettime();

                for _ in 0..CALLS_PER_THREAD {
                    let current = gettime();

                    // Field values of one call must never appear mixed with
                    // another's: the invariant and the per-thread monotonic order
                    // both hold under contention.
                    assert!(current.nanoseconds <= 999_999_999);
                    assert!(current >= previous);

                    previous = current;
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("sampling thread panicked");
    }
}
