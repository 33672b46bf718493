//! Availability-window grammar
//!
//! Prospects state their call availability as free text like
//! `"9:00-9:30,14:00-14:30"`. Each comma-separated element follows the
//! `"HH:MM-HH:MM"` grammar; an element that does not parse falls back to the
//! fixed default window instead of failing the pipeline.

use chrono::NaiveTime;

use crate::types::TimeWindow;

/// The window substituted when an element does not parse.
pub fn default_window() -> TimeWindow {
    // 10:00-10:30, always valid
    TimeWindow {
        start: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN),
        end: NaiveTime::from_hms_opt(10, 30, 0).unwrap_or(NaiveTime::MIN),
    }
}

/// Parse one `"HH:MM-HH:MM"` element, falling back to the default window.
pub fn parse_time_range(raw: &str) -> TimeWindow {
    try_parse_time_range(raw).unwrap_or_else(default_window)
}

fn try_parse_time_range(raw: &str) -> Option<TimeWindow> {
    let (start_raw, end_raw) = raw.split_once('-')?;
    let start = NaiveTime::parse_from_str(start_raw.trim(), "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(end_raw.trim(), "%H:%M").ok()?;
    Some(TimeWindow { start, end })
}

/// Parse a comma-separated availability string into candidate windows,
/// preserving the order the prospect wrote them in.
///
/// An empty or blank string yields a single default window so a record with
/// no stated availability still gets a scheduling attempt.
pub fn parse_windows(raw: &str) -> Vec<TimeWindow> {
    if raw.trim().is_empty() {
        return vec![default_window()];
    }

    raw.split(',').map(parse_time_range).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_well_formed_range() {
        let window = parse_time_range("9:00-9:30");
        assert_eq!(window.start, time(9, 0));
        assert_eq!(window.end, time(9, 30));
    }

    #[test]
    fn tolerates_whitespace_around_bounds() {
        let window = parse_time_range(" 14:00 - 14:30 ");
        assert_eq!(window.start, time(14, 0));
        assert_eq!(window.end, time(14, 30));
    }

    #[test]
    fn falls_back_on_malformed_input() {
        assert_eq!(parse_time_range("whenever"), default_window());
        assert_eq!(parse_time_range("25:99-26:00"), default_window());
        assert_eq!(parse_time_range(""), default_window());
    }

    #[test]
    fn splits_candidate_list_in_written_order() {
        let windows = parse_windows("9:00-9:30,14:00-14:30");
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].start, time(9, 0));
        assert_eq!(windows[1].start, time(14, 0));
    }

    #[test]
    fn blank_availability_yields_single_default() {
        assert_eq!(parse_windows("  "), vec![default_window()]);
    }

    #[test]
    fn malformed_element_in_list_falls_back_without_dropping_others() {
        let windows = parse_windows("9:00-9:30,garbage");
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1], default_window());
    }
}
