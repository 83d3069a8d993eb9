//! Scheduling domain module

mod interval;

pub use interval::{Interval, DEFAULT_COPY_DELAY_MS, DEFAULT_POLL_INTERVAL_MS};
