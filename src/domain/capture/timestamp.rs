//! Capture timestamp value object

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Format used inside generated filenames (second resolution)
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Format used inside saved documents
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock instant a capture started, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CaptureTime(DateTime<Local>);

impl CaptureTime {
    pub fn now() -> Self {
        Self(Local::now())
    }

    /// Build from local calendar fields; `None` if the fields are invalid
    /// or fall in a DST gap.
    pub fn from_local(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
        Local.from_local_datetime(&naive).single().map(Self)
    }

    /// `YYYY-MM-DD_HH-mm-ss`
    pub fn file_stamp(&self) -> String {
        self.0.format(FILE_STAMP_FORMAT).to_string()
    }

    /// `YYYY-MM-DD HH:mm:ss`
    pub fn display(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }
}

impl fmt::Display for CaptureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
