//! Integration tests for the monotonic sequencing guarantees of the real clock.

#![cfg(not(miri))] // Miri cannot talk to the real platform.

use clock_probe::Clock;

const SAMPLES: usize = 10_000;

#[test]
fn tight_loop_never_decreases() {
    let clock = Clock::new();

    let mut previous = clock.sample().expect("real clock read failed");

    for _ in 0..SAMPLES {
        let current = clock.sample().expect("real clock read failed");

        assert!(
            current >= previous,
            "monotonic clock moved backward: {previous:?} -> {current:?}"
        );

        previous = current;
    }
}

#[test]
fn tight_loop_mostly_advances() {
    // At native resolution the clock should tick between most consecutive samples;
    // a majority of strictly increasing pairs demonstrates the source is genuinely
    // high-resolution rather than a coarse cached value.
    let clock = Clock::new();

    let mut strictly_increasing = 0_usize;
    let mut previous = clock.sample().expect("real clock read failed");

    for _ in 0..SAMPLES {
        let current = clock.sample().expect("real clock read failed");

        if current > previous {
            strictly_increasing += 1;
        }

        previous = current;
    }

    assert!(
        strictly_increasing > SAMPLES / 2,
        "only {strictly_increasing} of {SAMPLES} consecutive samples advanced"
    );
}

#[test]
fn every_sample_satisfies_nanosecond_invariant() {
    let clock = Clock::new();

    for _ in 0..SAMPLES {
        let reading = clock.sample().expect("real clock read failed");
        assert!(reading.nanoseconds() <= 999_999_999);
    }
}
