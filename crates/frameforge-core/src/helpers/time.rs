// crates/frameforge-core/src/helpers/time.rs
//
// Wall-clock formatting shared by both log panels.

use chrono::{Local, NaiveTime, Timelike};

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveTime {
    let t = Local::now().time();
    t.with_nanosecond(0).unwrap_or(t)
}

/// Format a wall-clock time as `HH:MM:SS` (24-hour).
///
/// ```
/// use chrono::NaiveTime;
/// use frameforge_core::helpers::time::format_clock;
/// let t = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
/// assert_eq!(format_clock(t), "09:05:07");
/// ```
pub fn format_clock(t: NaiveTime) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}
