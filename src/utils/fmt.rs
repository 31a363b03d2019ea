//! Formatting utilities
use std::fmt;
use std::time::Duration;

/// Pretty-printing
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrettyPrint<T>(pub T);

impl fmt::Display for PrettyPrint<f64> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = self.0.abs();
        if (magnitude >= 1e6 || magnitude <= 1e-4) && self.0 != 0.0 {
            fmt::LowerExp::fmt(&self.0, f)
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

/// Display a duration as wall-clock time `h:mm:ss`, truncating fractional seconds.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(pub Duration);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let seconds = self.0.as_secs();
        write!(
            f,
            "{}:{:02}:{:02}",
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.5, "0.500")]
    #[case(0.0, "0.000")]
    #[case(2.5e7, "2.500e7")]
    #[case(-3e-5, "-3.000e-5")]
    fn pretty_print_f64(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format!("{:.3}", PrettyPrint(value)), expected);
    }

    #[rstest]
    #[case(0, "0:00:00")]
    #[case(16, "0:00:16")]
    #[case(3599, "0:59:59")]
    #[case(90061, "25:01:01")]
    fn clock_time(#[case] seconds: u64, #[case] expected: &str) {
        assert_eq!(ClockTime(Duration::from_secs(seconds)).to_string(), expected);
    }

    #[test]
    fn clock_time_truncates() {
        assert_eq!(ClockTime(Duration::from_millis(1999)).to_string(), "0:00:01");
    }
}
