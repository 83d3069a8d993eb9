//! Interval value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::IntervalParseError;

/// Default clipboard poll interval (500 milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Default wait after simulating a copy before reading the clipboard
pub const DEFAULT_COPY_DELAY_MS: u64 = 100;

/// Value object representing a positive time interval.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval {
    milliseconds: u64,
}

impl Interval {
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs * 1000,
        }
    }

    /// Default poll interval (500ms)
    pub const fn default_poll() -> Self {
        Self::from_millis(DEFAULT_POLL_INTERVAL_MS)
    }

    /// Default copy settle delay (100ms)
    pub const fn default_copy_delay() -> Self {
        Self::from_millis(DEFAULT_COPY_DELAY_MS)
    }

    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    /// Parse an interval string.
    /// Supported formats: "500ms", "2s", "1m", "1m30s", "1s250ms"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || IntervalParseError {
            input: s.to_string(),
        };
        let input = s.trim().to_lowercase();

        let mut total_ms: u64 = 0;
        let mut current_num = String::new();
        let mut found_any = false;
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
                continue;
            }
            if current_num.is_empty() {
                return Err(err());
            }
            let value: u64 = current_num.parse().map_err(|_| err())?;
            let multiplier = match ch {
                'm' if chars.peek() == Some(&'s') => {
                    chars.next();
                    1
                }
                'm' => 60_000,
                's' => 1000,
                _ => return Err(err()),
            };
            total_ms = value
                .checked_mul(multiplier)
                .and_then(|v| total_ms.checked_add(v))
                .ok_or_else(err)?;
            current_num.clear();
            found_any = true;
        }

        if !current_num.is_empty() || !found_any || total_ms == 0 {
            return Err(err());
        }

        Ok(Self {
            milliseconds: total_ms,
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.milliseconds % 1000;
        let total_secs = self.milliseconds / 1000;
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        if seconds > 0 {
            write!(f, "{}s", seconds)?;
        }
        if ms > 0 || self.milliseconds == 0 {
            write!(f, "{}ms", ms)?;
        }
        Ok(())
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::default_poll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_millis() {
        let i: Interval = "500ms".parse().unwrap();
        assert_eq!(i.as_millis(), 500);
    }

    #[test]
    fn parse_seconds_and_minutes() {
        assert_eq!("2s".parse::<Interval>().unwrap().as_millis(), 2000);
        assert_eq!("1m".parse::<Interval>().unwrap().as_millis(), 60_000);
        assert_eq!("1m30s".parse::<Interval>().unwrap().as_millis(), 90_000);
        assert_eq!("1s250ms".parse::<Interval>().unwrap().as_millis(), 1250);
    }

    #[test]
    fn parse_case_and_whitespace() {
        assert_eq!("  750MS ".parse::<Interval>().unwrap().as_millis(), 750);
    }

    #[test]
    fn parse_invalid() {
        assert!("".parse::<Interval>().is_err());
        assert!("500".parse::<Interval>().is_err());
        assert!("ms".parse::<Interval>().is_err());
        assert!("5h".parse::<Interval>().is_err());
        assert!("0ms".parse::<Interval>().is_err());
        assert!("1.5s".parse::<Interval>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for s in ["500ms", "2s", "1m", "1m30s", "1s250ms"] {
            let i: Interval = s.parse().unwrap();
            assert_eq!(i.to_string(), s);
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(Interval::default_poll().as_millis(), 500);
        assert_eq!(Interval::default_copy_delay().as_millis(), 100);
        assert_eq!(Interval::default(), Interval::default_poll());
        assert_eq!(Interval::from_secs(2).as_std(), StdDuration::from_secs(2));
    }
}
