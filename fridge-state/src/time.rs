//! Calendar helpers shared by the containers.

use chrono::{DateTime, Datelike, Days, Local, NaiveTime, TimeZone, Utc};

/// Whole days from `a` to `b`, clamped at zero when `a` is later.
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (b - a).num_days().max(0)
}

/// Whole days since an instant. An instant in the future counts as zero,
/// so a clock rollback never reports phantom days.
pub fn days_since(then: DateTime<Utc>) -> i64 {
    days_between(then, Utc::now())
}

/// The most recent Sunday at local midnight, as a UTC instant.
///
/// Weekly quests key off this; a pick on Sunday itself starts that same day.
pub fn start_of_week(now: DateTime<Local>) -> DateTime<Utc> {
    let back = Days::new(u64::from(now.weekday().num_days_from_sunday()));
    let sunday = now.date_naive().checked_sub_days(back).unwrap_or_else(|| now.date_naive());
    let midnight = sunday.and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight) {
        chrono::LocalResult::Single(instant) => instant.with_timezone(&Utc),
        // DST fold: take the earlier reading
        chrono::LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // DST gap swallowed midnight; the day boundary is close enough
        chrono::LocalResult::None => Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike, Weekday};

    #[test]
    fn days_between_floors_and_clamps_at_zero() {
        let t0 = Utc::now();
        let t1 = t0 + Duration::hours(73);
        assert_eq!(days_between(t0, t1), 3);
        assert_eq!(days_between(t1, t0), 0);
    }

    #[test]
    fn days_since_a_future_instant_is_zero() {
        assert_eq!(days_since(Utc::now() + Duration::days(2)), 0);
    }

    #[test]
    fn week_starts_on_sunday_at_local_midnight() {
        let start = start_of_week(Local::now()).with_timezone(&Local);
        assert_eq!(start.weekday(), Weekday::Sun);
        assert_eq!(start.hour(), 0);
        assert_eq!(start.minute(), 0);
        assert!(start <= Local::now());
        assert!(Local::now() - start < Duration::days(7));
    }
}
