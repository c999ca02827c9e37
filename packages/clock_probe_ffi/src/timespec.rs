use clock_probe::{Error, TimeReading};

/// The caller-visible clock reading record.
///
/// This is the bit-exact boundary contract: exactly two fields, in this order, with
/// these widths. The caller's declared record type must mirror it field-for-field.
/// `seconds` counts from the monotonic source's arbitrary per-process-stable epoch;
/// `nanoseconds` is the sub-second remainder and is always in `0..=999_999_999`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimeSpec {
    /// Whole seconds of the reading.
    pub seconds: i64,

    /// Sub-second remainder in nanoseconds.
    pub nanoseconds: u32,
}

impl From<TimeReading> for TimeSpec {
    /// Marshals a reading field-for-field; no truncation, rounding or unit conversion.
    fn from(reading: TimeReading) -> Self {
        Self {
            seconds: reading.seconds(),
            nanoseconds: reading.nanoseconds(),
        }
    }
}

/// Status code returned by every exported entry point.
///
/// Stable values, part of the boundary contract.
#[repr(i32)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SampleStatus {
    /// The out-value was written with a fresh reading.
    Ok = 0,

    /// The OS clock primitive could not produce a reading. The out-value was not
    /// written.
    ClockUnavailable = 1,

    /// The callee-side record could not be allocated. Only produced by entry points
    /// that allocate; the out-value was not written.
    AllocationFailure = 2,
}

impl From<&Error> for SampleStatus {
    fn from(error: &Error) -> Self {
        match error {
            Error::ClockUnavailable { .. } => Self::ClockUnavailable,
            // `Error` is non-exhaustive; any future sampler error still means the
            // clock did not produce a reading.
            _ => Self::ClockUnavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn marshalling_preserves_both_fields_exactly() {
        let reading = TimeReading::new(1_700_000_000, 123_456_789);

        let spec = TimeSpec::from(reading);

        assert_eq!(spec.seconds, 1_700_000_000);
        assert_eq!(spec.nanoseconds, 123_456_789);
    }

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(SampleStatus::Ok as i32, 0);
        assert_eq!(SampleStatus::ClockUnavailable as i32, 1);
        assert_eq!(SampleStatus::AllocationFailure as i32, 2);
    }

    #[test]
    fn failed_clock_read_maps_to_clock_unavailable() {
        let error = Error::ClockUnavailable {
            source: io::Error::new(io::ErrorKind::Unsupported, "no such clock id"),
        };

        assert_eq!(SampleStatus::from(&error), SampleStatus::ClockUnavailable);
    }
}
