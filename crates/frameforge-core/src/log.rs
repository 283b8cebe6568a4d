// crates/frameforge-core/src/log.rs
//
// Append-only log panels. The main tab and the batch tab each own one.
//
// Lines are only ever appended or bulk-cleared; nothing removes a single
// entry except the optional capacity bound, which drops the oldest line.

use std::collections::VecDeque;
use std::fmt;

use chrono::NaiveTime;

use crate::helpers::time::{format_clock, now};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Info    => "ℹ",
            Severity::Success => "✓",
            Severity::Error   => "❌",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub at:       NaiveTime,
    pub severity: Severity,
    pub message:  String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", format_clock(self.at), self.severity.glyph(), self.message)
    }
}

#[derive(Debug, Default)]
pub struct LogPanel {
    entries:  VecDeque<LogEntry>,
    /// Maximum retained lines; `None` keeps everything for the session.
    capacity: Option<usize>,
    /// Set on every append, consumed by the view once it has scrolled.
    scroll_to_bottom: bool,
}

impl LogPanel {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A panel that keeps at most `capacity` lines, evicting the oldest.
    pub fn bounded(capacity: usize) -> Self {
        Self { capacity: Some(capacity.max(1)), ..Self::default() }
    }

    pub fn log(&mut self, message: impl Into<String>, severity: Severity) {
        self.log_at(now(), message, severity);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(message, Severity::Info);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(message, Severity::Error);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.log(message, Severity::Success);
    }

    /// Append with an explicit timestamp.
    pub fn log_at(&mut self, at: NaiveTime, message: impl Into<String>, severity: Severity) {
        if let Some(cap) = self.capacity {
            while self.entries.len() >= cap {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(LogEntry { at, severity, message: message.into() });
        self.scroll_to_bottom = true;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll_to_bottom = false;
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true once after each append so the view can jump to the end.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn line_format_matches_glyphs() {
        let mut log = LogPanel::unbounded();
        log.log_at(at(12, 0, 1), "starting", Severity::Info);
        log.log_at(at(12, 0, 2), "done", Severity::Success);
        log.log_at(at(12, 0, 3), "oops", Severity::Error);
        assert_eq!(log.lines(), vec![
            "[12:00:01] ℹ starting",
            "[12:00:02] ✓ done",
            "[12:00:03] ❌ oops",
        ]);
    }

    #[test]
    fn clear_after_log_is_empty_and_idempotent() {
        let mut log = LogPanel::unbounded();
        log.log("m", Severity::Success);
        log.clear();
        assert!(log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn keeps_call_order_and_duplicates() {
        let mut log = LogPanel::unbounded();
        for msg in ["a", "b", "a"] {
            log.info(msg);
        }
        let msgs: Vec<_> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(msgs, ["a", "b", "a"]);
    }

    #[test]
    fn bounded_panel_drops_oldest_first() {
        let mut log = LogPanel::bounded(3);
        for i in 0..5 {
            log.info(format!("line {i}"));
        }
        let msgs: Vec<_> = log.entries().map(|e| e.message.clone()).collect();
        assert_eq!(msgs, ["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn scroll_request_fires_once_per_append() {
        let mut log = LogPanel::unbounded();
        assert!(!log.take_scroll_request());
        log.info("x");
        assert!(log.take_scroll_request());
        assert!(!log.take_scroll_request());
    }
}
