//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `clock_probe` package `README.md`.

use clock_probe::Clock;

fn main() -> Result<(), clock_probe::Error> {
    let clock = Clock::new();

    let start = clock.sample()?;

    // Simulate some work
    std::thread::sleep(std::time::Duration::from_millis(10));

    let end = clock.sample()?;

    println!(
        "before: {}s + {}ns, after: {}s + {}ns",
        start.seconds(),
        start.nanoseconds(),
        end.seconds(),
        end.nanoseconds()
    );

    assert!(end >= start);

    Ok(())
}
