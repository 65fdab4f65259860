//! Wall-clock access for the login banner and the `date` command.
//!
//! Both renderings go through the [`Clock`] trait so session transitions can
//! be tested with a pinned time.

use chrono::{DateTime, FixedOffset, Local};

/// Source of the current time.
pub trait Clock: std::fmt::Debug {
    /// Current local time with its UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Locale-style timestamp used on the banner's `Last login:` line,
    /// e.g. `10/18/2026, 3:04:05 PM`.
    fn login_timestamp(&self) -> String {
        self.now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    }

    /// Long human-readable form printed by `date`,
    /// e.g. `Sun Oct 18 2026 15:04:05 GMT+0000`.
    fn date_string(&self) -> String {
        self.now().format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
    }
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// A clock stuck at one instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
pub(crate) fn test_clock() -> FixedClock {
    use chrono::TimeZone;

    let offset = FixedOffset::east_opt(0).unwrap();
    FixedClock(offset.with_ymd_and_hms(2026, 10, 18, 15, 4, 5).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_login_timestamp_is_locale_style() {
        assert_eq!(test_clock().login_timestamp(), "10/18/2026, 3:04:05 PM");

        let offset = FixedOffset::east_opt(0).unwrap();
        let morning = FixedClock(offset.with_ymd_and_hms(2026, 1, 2, 0, 30, 0).unwrap());
        assert_eq!(morning.login_timestamp(), "1/2/2026, 12:30:00 AM");
    }

    #[test]
    fn test_date_string_includes_offset() {
        assert_eq!(test_clock().date_string(), "Sun Oct 18 2026 15:04:05 GMT+0000");

        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let clock = FixedClock(ist.with_ymd_and_hms(2026, 3, 9, 8, 0, 0).unwrap());
        assert_eq!(clock.date_string(), "Mon Mar 09 2026 08:00:00 GMT+0530");
    }
}
