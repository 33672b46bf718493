//! First-fit slot search over prospect availability windows

use chrono::{Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use leadflow_domain::{AppointmentSlot, LeadflowError, Result, SchedulingConfig, TimeWindow};
use tracing::{debug, instrument, warn};

use super::ports::CalendarPort;

/// Computes the next conflict-free appointment slot.
///
/// Candidate windows are tried in the order the prospect wrote them, each
/// anchored to the day after the run in the business timezone. A busy slot
/// advances by the call duration, skipping the lunch gap and rolling over to
/// the next day's opening hour past close of business. The search in each
/// window is capped at `max_advances`; once every window is exhausted the
/// allocator reports no slot rather than looping.
pub struct SlotAllocator {
    config: SchedulingConfig,
    timezone: Tz,
}

impl SlotAllocator {
    /// Create an allocator, validating the business-hours configuration.
    pub fn new(config: SchedulingConfig) -> Result<Self> {
        let timezone = config.timezone()?;

        if config.call_duration_min == 0 {
            return Err(LeadflowError::Config("call duration must be positive".to_string()));
        }
        for (name, hour) in [
            ("open_hour", config.open_hour),
            ("close_hour", config.close_hour),
            ("lunch_hour", config.lunch_hour),
            ("lunch_resume_hour", config.lunch_resume_hour),
        ] {
            if hour >= 24 {
                return Err(LeadflowError::Config(format!("{name} must be below 24")));
            }
        }
        if config.open_hour >= config.close_hour {
            return Err(LeadflowError::Config(
                "open_hour must be before close_hour".to_string(),
            ));
        }

        Ok(Self { config, timezone })
    }

    /// The first day eligible for appointments: tomorrow in the business
    /// timezone.
    pub fn next_day(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive() + Days::new(1)
    }

    /// Find the first free slot for the given candidate windows.
    ///
    /// Returns `Ok(None)` when every window's advance budget is exhausted
    /// without a free interval.
    #[instrument(skip(self, windows, calendar), fields(windows = windows.len(), %from_day))]
    pub async fn find_slot(
        &self,
        windows: &[TimeWindow],
        calendar: &dyn CalendarPort,
        from_day: NaiveDate,
    ) -> Result<Option<AppointmentSlot>> {
        let duration = self.duration();

        for (index, window) in windows.iter().enumerate() {
            let mut start = from_day.and_time(window.start);
            let mut end = start + duration;
            let mut advances = 0_u32;

            loop {
                if calendar.is_free(start, end).await? {
                    debug!(window = index, %start, "found free slot");
                    return Ok(Some(AppointmentSlot { start, end, timezone: self.timezone }));
                }

                if advances >= self.config.max_advances {
                    warn!(window = index, advances, "slot search budget exhausted for window");
                    break;
                }
                advances += 1;

                start = self.advance(start);
                end = start + duration;
            }
        }

        Ok(None)
    }

    /// Move a busy candidate forward by one call duration, honoring the
    /// lunch gap and the end-of-day rollover.
    fn advance(&self, start: NaiveDateTime) -> NaiveDateTime {
        let mut next = start + self.duration();

        if next.hour() == self.config.lunch_hour {
            next = next.date().and_time(hour_start(self.config.lunch_resume_hour));
        }

        if next.hour() >= self.config.close_hour {
            next = (next.date() + Days::new(1)).and_time(hour_start(self.config.open_hour));
        }

        next
    }

    fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.config.call_duration_min))
    }
}

fn hour_start(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use leadflow_domain::EventRef;

    use super::*;

    /// Fake calendar that is busy for every interval starting before the
    /// given instant, and records each probe it receives.
    struct FakeCalendar {
        free_from: Option<NaiveDateTime>,
        probes: Mutex<Vec<(NaiveDateTime, NaiveDateTime)>>,
    }

    impl FakeCalendar {
        fn free_from(instant: NaiveDateTime) -> Self {
            Self { free_from: Some(instant), probes: Mutex::new(Vec::new()) }
        }

        fn always_busy() -> Self {
            Self { free_from: None, probes: Mutex::new(Vec::new()) }
        }

        fn probe_count(&self) -> usize {
            self.probes.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CalendarPort for FakeCalendar {
        async fn is_free(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<bool> {
            self.probes.lock().unwrap().push((start, end));
            Ok(self.free_from.is_some_and(|instant| start >= instant))
        }

        async fn create_event(
            &self,
            _summary: &str,
            _description: &str,
            _slot: &AppointmentSlot,
            _attendees: &[String],
        ) -> Result<EventRef> {
            Ok(EventRef("fake-event".to_string()))
        }
    }

    fn allocator() -> SlotAllocator {
        SlotAllocator::new(SchedulingConfig::default()).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        day().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn window(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeWindow {
        TimeWindow {
            start: NaiveTime::from_hms_opt(start_h, start_m, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end_h, end_m, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn takes_the_window_start_when_free() {
        let calendar = FakeCalendar::free_from(at(9, 0));
        let slot = allocator()
            .find_slot(&[window(9, 0, 9, 30)], &calendar, day())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(slot.start, at(9, 0));
        assert_eq!(slot.end, at(9, 30));
        assert_eq!(slot.timezone, chrono_tz::Europe::Paris);
        assert_eq!(calendar.probe_count(), 1);
    }

    #[tokio::test]
    async fn busy_morning_advances_to_free_afternoon_slot() {
        // First window busy, second free: the appointment lands at 14:00 on
        // the candidate day.
        let calendar = FakeCalendar::free_from(at(14, 0));
        let slot = allocator()
            .find_slot(&[window(9, 0, 9, 30), window(14, 0, 14, 30)], &calendar, day())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(slot.start, at(14, 0));
        assert_eq!(slot.end, at(14, 30));
    }

    #[tokio::test]
    async fn slot_duration_is_fixed_regardless_of_window_length() {
        let calendar = FakeCalendar::free_from(at(9, 0));
        let slot = allocator()
            .find_slot(&[window(9, 0, 11, 30)], &calendar, day())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(slot.end - slot.start, Duration::minutes(30));
    }

    #[tokio::test]
    async fn advancing_skips_the_lunch_gap() {
        let calendar = FakeCalendar::free_from(at(13, 0));
        let slot = allocator()
            .find_slot(&[window(11, 30, 12, 0)], &calendar, day())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(slot.start, at(13, 0));

        // No probe ever lands inside the lunch gap.
        for (start, _) in calendar.probes.lock().unwrap().iter() {
            assert_ne!(start.hour(), 12, "probed inside the lunch gap: {start}");
        }
    }

    #[tokio::test]
    async fn reaching_close_of_business_rolls_over_to_next_morning() {
        let next_morning = (day() + Days::new(1)).and_hms_opt(10, 0, 0).unwrap();
        let calendar = FakeCalendar::free_from(next_morning);
        let slot = allocator()
            .find_slot(&[window(18, 30, 19, 0)], &calendar, day())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(slot.start, next_morning);
    }

    #[tokio::test]
    async fn search_terminates_when_calendar_is_always_busy() {
        let calendar = FakeCalendar::always_busy();
        let config = SchedulingConfig { max_advances: 10, ..SchedulingConfig::default() };
        let result = SlotAllocator::new(config)
            .unwrap()
            .find_slot(&[window(9, 0, 9, 30), window(14, 0, 14, 30)], &calendar, day())
            .await
            .unwrap();

        assert!(result.is_none());
        // One initial probe plus max_advances retries per window.
        assert_eq!(calendar.probe_count(), 2 * 11);
    }

    #[tokio::test]
    async fn returned_slot_never_overlaps_a_busy_interval() {
        struct BusyList {
            busy: Vec<(NaiveDateTime, NaiveDateTime)>,
        }

        #[async_trait]
        impl CalendarPort for BusyList {
            async fn is_free(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<bool> {
                Ok(self.busy.iter().all(|(b_start, b_end)| end <= *b_start || start >= *b_end))
            }

            async fn create_event(
                &self,
                _summary: &str,
                _description: &str,
                _slot: &AppointmentSlot,
                _attendees: &[String],
            ) -> Result<EventRef> {
                Ok(EventRef("busy-list".to_string()))
            }
        }

        let busy = vec![(at(9, 0), at(10, 0)), (at(10, 0), at(10, 45))];
        let calendar = BusyList { busy: busy.clone() };
        let slot = allocator()
            .find_slot(&[window(9, 0, 9, 30)], &calendar, day())
            .await
            .unwrap()
            .unwrap();

        for (b_start, b_end) in busy {
            assert!(slot.end <= b_start || slot.start >= b_end);
        }
        assert_eq!(slot.start, at(11, 0));
    }

    #[tokio::test]
    async fn empty_window_list_finds_nothing() {
        let calendar = FakeCalendar::free_from(at(9, 0));
        let result = allocator().find_slot(&[], &calendar, day()).await.unwrap();
        assert!(result.is_none());
        assert_eq!(calendar.probe_count(), 0);
    }

    #[test]
    fn rejects_inverted_business_hours() {
        let config = SchedulingConfig {
            open_hour: 19,
            close_hour: 10,
            ..SchedulingConfig::default()
        };
        assert!(SlotAllocator::new(config).is_err());
    }

    #[test]
    fn rejects_zero_call_duration() {
        let config = SchedulingConfig { call_duration_min: 0, ..SchedulingConfig::default() };
        assert!(SlotAllocator::new(config).is_err());
    }
}
