// src/services/weekday.rs
// DOCUMENTATION: Weekday emphasis for opening-hours blocks
// PURPOSE: Map today's date to a weekday label and bold the matching lines

use chrono::{Datelike, Local};

/// Emphasis delimiter understood by the renderer
pub const EMPHASIS: &str = "**";

/// Ordered weekday labels, Monday first
/// DOCUMENTATION: Passed explicitly so the index-to-label mapping is testable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayLabels([&'static str; 7]);

/// Labels used by the Places API for languageCode "ja"
pub const JAPANESE_WEEKDAYS: WeekdayLabels = WeekdayLabels::new([
    "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日", "日曜日",
]);

impl WeekdayLabels {
    pub const fn new(labels: [&'static str; 7]) -> Self {
        Self(labels)
    }

    /// Label for a day index (0 = Monday, 6 = Sunday)
    pub fn label(&self, index: u32) -> &'static str {
        self.0[(index % 7) as usize]
    }

    /// Label for the current local date
    pub fn today(&self) -> &'static str {
        self.label(Local::now().weekday().num_days_from_monday())
    }
}

impl Default for WeekdayLabels {
    fn default() -> Self {
        JAPANESE_WEEKDAYS
    }
}

/// Wrap every line starting with `today` in emphasis markers
/// DOCUMENTATION: Line-anchored scan, each line handled independently.
/// A wrapped line starts with the marker, not the label, so a second
/// pass leaves it alone.
pub fn highlight_today(text: &str, today: &str) -> String {
    if today.is_empty() {
        return text.to_string();
    }

    text.split('\n')
        .map(|line| {
            if line.starts_with(today) {
                format!("{EMPHASIS}{line}{EMPHASIS}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
