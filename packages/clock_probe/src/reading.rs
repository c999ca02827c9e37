/// One instantaneous reading of the clock.
///
/// A reading is the raw two-field value produced by the OS clock primitive: whole
/// `seconds` and the sub-second `nanoseconds` remainder. For a monotonic clock source the
/// `seconds` epoch is arbitrary but stable for the lifetime of the process (boot time on
/// Linux), so readings are only meaningful relative to each other.
///
/// Readings are immutable plain values, created fresh on every sample and never cached or
/// reused. They order lexicographically on `(seconds, nanoseconds)`, so for a monotonic
/// source a later sample always compares greater than or equal to an earlier one.
///
/// # Examples
///
/// ```rust
/// use clock_probe::TimeReading;
///
/// let earlier = TimeReading::new(100, 999_999_999);
/// let later = TimeReading::new(101, 0);
///
/// assert!(later > earlier);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimeReading {
    // Field order matters: the derived `Ord` provides the lexicographic
    // `(seconds, nanoseconds)` ordering.
    seconds: i64,
    nanoseconds: u32,
}

impl TimeReading {
    /// The largest valid `nanoseconds` value; the sub-second remainder never reaches a
    /// full second.
    pub const MAX_NANOSECONDS: u32 = 999_999_999;

    /// Creates a reading from its two raw fields.
    ///
    /// # Panics
    ///
    /// Panics if `nanoseconds` exceeds [`Self::MAX_NANOSECONDS`].
    #[must_use]
    pub const fn new(seconds: i64, nanoseconds: u32) -> Self {
        assert!(
            nanoseconds <= Self::MAX_NANOSECONDS,
            "nanoseconds must be a sub-second remainder"
        );

        Self {
            seconds,
            nanoseconds,
        }
    }

    /// Whole seconds of the reading, relative to the clock source's epoch.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second remainder, always in `0..=999_999_999`.
    #[must_use]
    pub const fn nanoseconds(&self) -> u32 {
        self.nanoseconds
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(TimeReading: Copy, Debug, Eq, Ord, Send, Sync);

    #[test]
    fn ordering_is_lexicographic() {
        let a = TimeReading::new(5, 900_000_000);
        let b = TimeReading::new(6, 100_000_000);
        let c = TimeReading::new(6, 100_000_001);

        assert!(a < b);
        assert!(b < c);
        assert_eq!(b, TimeReading::new(6, 100_000_000));
    }

    #[test]
    fn fields_round_trip() {
        let reading = TimeReading::new(1_700_000_000, 123_456_789);

        assert_eq!(reading.seconds(), 1_700_000_000);
        assert_eq!(reading.nanoseconds(), 123_456_789);
    }

    #[test]
    fn max_nanoseconds_is_accepted() {
        let reading = TimeReading::new(0, TimeReading::MAX_NANOSECONDS);

        assert_eq!(reading.nanoseconds(), 999_999_999);
    }

    #[test]
    #[should_panic(expected = "sub-second remainder")]
    fn full_second_of_nanoseconds_is_rejected() {
        drop(TimeReading::new(0, 1_000_000_000));
    }

    #[test]
    fn negative_seconds_are_representable() {
        // A monotonic source never goes negative but the field is signed by contract.
        let reading = TimeReading::new(-1, 0);

        assert_eq!(reading.seconds(), -1);
    }
}
