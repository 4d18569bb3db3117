//! Calendar-local date arithmetic.
//!
//! Every "same day" or "this week" question in Habitally is answered in one
//! timezone. A [`Calendar`] carries that timezone together with the first
//! weekday, so callers construct it once and pass it everywhere.

use chrono::{
    DateTime, Datelike, Days, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Utc, Weekday,
};

use crate::Time;

/// Timezone-aware calendar used for day and week bucketing.
#[derive(Debug, Clone)]
pub struct Calendar<Tz: TimeZone = Local> {
    tz: Tz,
    week_start: Weekday,
}

impl Calendar<Local> {
    /// Calendar in the system timezone with weeks starting on Sunday.
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl Default for Calendar<Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    /// Create a calendar for `tz`. Weeks start on Sunday.
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            week_start: Weekday::Sun,
        }
    }

    /// Use a different first day of the week.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// The timezone used for local dates.
    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// The configured first day of the week.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Local calendar date of an instant.
    pub fn local_date(&self, at: Time) -> NaiveDate {
        at.with_timezone(&self.tz).date_naive()
    }

    /// True iff both instants fall on the same local calendar date.
    pub fn is_same_day(&self, a: Time, b: Time) -> bool {
        self.local_date(a) == self.local_date(b)
    }

    /// First instant of the local date containing `at`.
    pub fn start_of_day(&self, at: Time) -> Time {
        self.midnight(self.local_date(at))
    }

    /// First instant of the week containing `reference`.
    pub fn start_of_week(&self, reference: Time) -> Time {
        let date = self.local_date(reference);
        let offset = date.weekday().days_since(self.week_start);
        let first = date
            .checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(date);
        self.midnight(first)
    }

    /// `from` minus `n` calendar days at the same local time of day.
    ///
    /// Falls back to subtracting `n * 24h` when the shifted local time does
    /// not exist in this timezone. Saturates at the earliest representable instant.
    pub fn days_ago(&self, n: u32, from: Time) -> Time {
        from.with_timezone(&self.tz)
            .checked_sub_days(Days::new(u64::from(n)))
            .map(|shifted| shifted.with_timezone(&Utc))
            .unwrap_or_else(|| shift_days(from, -i64::from(n)))
    }

    /// `from` plus `n` calendar days at the same local time of day.
    ///
    /// Saturates at the latest representable instant.
    pub fn days_after(&self, n: u32, from: Time) -> Time {
        from.with_timezone(&self.tz)
            .checked_add_days(Days::new(u64::from(n)))
            .map(|shifted| shifted.with_timezone(&Utc))
            .unwrap_or_else(|| shift_days(from, i64::from(n)))
    }

    /// Whole calendar days from `from` to `target`, never negative.
    pub fn days_until(&self, target: Time, from: Time) -> u32 {
        let diff = (self.local_date(target) - self.local_date(from)).num_days();
        u32::try_from(diff.max(0)).unwrap_or(u32::MAX)
    }

    /// `from` plus `n` calendar months; the day is clamped to the month end.
    ///
    /// Saturates at the latest representable instant.
    pub fn add_months(&self, n: u32, from: Time) -> Time {
        from.with_timezone(&self.tz)
            .checked_add_months(Months::new(n))
            .map(|shifted| shifted.with_timezone(&Utc))
            .unwrap_or_else(|| shift_days(from, 30 * i64::from(n)))
    }

    /// The instant on `day`'s local date at wall-clock `time`.
    pub fn at_time_of_day(&self, day: Time, time: NaiveTime) -> Time {
        self.resolve(self.local_date(day).and_time(time))
    }

    fn midnight(&self, date: NaiveDate) -> Time {
        self.resolve(date.and_time(NaiveTime::MIN))
    }

    /// Map a local wall-clock value to UTC, stepping past DST gaps.
    fn resolve(&self, naive: NaiveDateTime) -> Time {
        let mut candidate = naive;
        for _ in 0..4 {
            if let Some(found) = self.tz.from_local_datetime(&candidate).earliest() {
                return found.with_timezone(&Utc);
            }
            candidate += Duration::hours(1);
        }
        DateTime::from_naive_utc_and_offset(naive, Utc)
    }
}

/// `from` moved by whole 24h days, clamped to the representable range.
fn shift_days(from: Time, days: i64) -> Time {
    let bound = if days < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    };
    Duration::try_days(days)
        .and_then(|delta| from.checked_add_signed(delta))
        .unwrap_or(bound)
}
