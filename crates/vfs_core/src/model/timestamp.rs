//! Creation timestamps and the clock that produces them.
//!
//! # Invariants
//! - Timestamps carry whole seconds only.
//! - Ordering is chronological and matches the lexical order of the
//!   rendered `YYYY-MM-DD HH:MM:SS` form.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Serialize, Serializer};
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// Render/parse format for timestamps in listings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Second-resolution local creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Wraps a date-time, dropping any sub-second part.
    pub fn from_datetime(value: NaiveDateTime) -> Self {
        Self(value.trunc_subsecs(0))
    }

    /// Parses the listing form, e.g. `2024-05-01 09:30:00`.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(Self::from_datetime)
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Source of creation times for registries.
pub trait Clock: Debug + Send + Sync {
    /// Returns the current time at second resolution.
    fn now(&self) -> Timestamp;
}

/// Shared clock handle threaded from the directory down to file registries.
pub type SharedClock = Arc<dyn Clock>;

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(Local::now().naive_local())
    }
}

pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

#[cfg(test)]
mod tests {
    use super::{Clock, SystemClock, Timestamp};
    use chrono::NaiveDate;

    #[test]
    fn display_is_zero_padded_fixed_width() {
        let ts = Timestamp::parse("2024-01-02 03:04:05").unwrap();
        assert_eq!(ts.to_string(), "2024-01-02 03:04:05");
        assert_eq!(ts.to_string().len(), 19);
    }

    #[test]
    fn sub_seconds_are_truncated() {
        let precise = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_milli_opt(12, 0, 0, 750)
            .unwrap();
        let ts = Timestamp::from_datetime(precise);
        assert_eq!(ts, Timestamp::parse("2024-06-01 12:00:00").unwrap());
    }

    #[test]
    fn ordering_matches_rendered_string_order() {
        let earlier = Timestamp::parse("2023-12-31 23:59:59").unwrap();
        let later = Timestamp::parse("2024-01-01 00:00:00").unwrap();
        assert!(earlier < later);
        assert!(earlier.to_string() < later.to_string());
    }

    #[test]
    fn system_clock_has_no_sub_seconds() {
        let now = SystemClock.now();
        assert_eq!(Timestamp::from_datetime(now.as_datetime()), now);
    }
}
