/// Taskbar clock formatting
///
/// The host passes the current time and its UTC offset; nothing here reads
/// the system clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    /// Local time minus UTC, in minutes (UTC+2 is `120`)
    pub utc_offset_minutes: i32,
}

const MS_PER_MINUTE: f64 = 60_000.0;
const MINUTES_PER_DAY: i64 = 24 * 60;

impl Clock {
    /// Create a clock for a fixed UTC offset
    pub fn new(utc_offset_minutes: i32) -> Self {
        Self { utc_offset_minutes }
    }

    /// Create a clock from a browser timezone offset
    ///
    /// `Date.getTimezoneOffset()` reports UTC minus local time, the opposite
    /// sign of `utc_offset_minutes`. Non-finite input falls back to UTC.
    pub fn from_timezone_offset(timezone_offset_minutes: f64) -> Self {
        if !timezone_offset_minutes.is_finite() {
            return Self::default();
        }
        Self::new((timezone_offset_minutes.round() as i32).saturating_neg())
    }

    /// Twelve-hour label such as `"9:05 PM"` for a Unix timestamp in ms
    pub fn label(&self, now_ms: f64) -> String {
        // Float-to-int casts saturate; the offset must too
        let minutes = ((now_ms / MS_PER_MINUTE).floor() as i64)
            .saturating_add(i64::from(self.utc_offset_minutes));
        let minute_of_day = minutes.rem_euclid(MINUTES_PER_DAY);
        let hour = minute_of_day / 60;
        let minute = minute_of_day % 60;

        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        let suffix = if hour < 12 { "AM" } else { "PM" };
        format!("{}:{:02} {}", display_hour, minute, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: f64 = 3_600_000.0;

    #[test]
    fn test_midnight_and_noon() {
        let clock = Clock::new(0);
        assert_eq!(clock.label(0.0), "12:00 AM");
        assert_eq!(clock.label(12.0 * HOUR_MS), "12:00 PM");
    }

    #[test]
    fn test_minutes_are_padded() {
        let clock = Clock::new(0);
        assert_eq!(clock.label(21.0 * HOUR_MS + 5.0 * 60_000.0), "9:05 PM");
    }

    #[test]
    fn test_offset_wraps_days() {
        // 23:30 UTC at UTC+2 is 1:30 the next day
        let clock = Clock::new(120);
        assert_eq!(clock.label(23.5 * HOUR_MS), "1:30 AM");

        // 00:15 UTC at UTC-5 is 7:15 the previous evening
        let clock = Clock::new(-300);
        assert_eq!(clock.label(0.25 * HOUR_MS), "7:15 PM");
    }

    #[test]
    fn test_from_timezone_offset_flips_sign() {
        // UTC+2 reports -120, UTC-5 reports 300
        assert_eq!(Clock::from_timezone_offset(-120.0).utc_offset_minutes, 120);
        assert_eq!(Clock::from_timezone_offset(300.0).utc_offset_minutes, -300);
        assert_eq!(Clock::from_timezone_offset(f64::NAN), Clock::default());

        let clock = Clock::from_timezone_offset(-120.0);
        assert_eq!(clock.label(23.5 * HOUR_MS), "1:30 AM");
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        assert_eq!(Clock::new(120).label(f64::MAX), "6:07 PM");
        assert_eq!(Clock::new(-300).label(f64::MIN), "5:52 AM");
    }
}
