use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed clock time {0:?}, expected HH:MM")]
pub struct ParseTimeError(pub String);

/// A wall-clock time of day with minute resolution, as it appears in
/// timetables ("HH:MM", no date, no timezone).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    pub const fn from_hm(hour: u32, minute: u32) -> Self {
        Self(hour * 60 + minute)
    }

    pub const fn hour(&self) -> u32 {
        self.0 / 60
    }

    pub const fn minute(&self) -> u32 {
        self.0 % 60
    }

    pub fn parse(s: &str) -> Result<Self, ParseTimeError> {
        let err = || ParseTimeError(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let hour: u32 = h.parse().map_err(|_| err())?;
        let minute: u32 = m.parse().map_err(|_| err())?;
        if hour > 23 || minute > 59 {
            return Err(err());
        }
        Ok(Self::from_hm(hour, minute))
    }

    /// Anchors this time of day onto a calendar date. Hours wrap mod 24,
    /// so the result always lands on the given date.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        let time = NaiveTime::from_hms_opt(self.hour() % 24, self.minute(), 0)
            .unwrap_or(NaiveTime::MIN);
        date.and_time(time)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(value: NaiveTime) -> Self {
        Self::from_hm(value.hour(), value.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// Serialized as the zero-padded "HH:MM" string so the snapshot sorts the
// same way the in-memory values do.
impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00";
    let ctime = ClockTime::parse(time).unwrap();
    assert_eq!(time, ctime.to_string())
}

#[test]
fn parse_unparse_2() {
    let time = "09:05";
    let ctime = ClockTime::parse(time).unwrap();
    assert_eq!(time, ctime.to_string())
}

#[test]
fn parse_unparse_3() {
    let time = "14:30";
    let ctime = ClockTime::parse(time).unwrap();
    assert_eq!(time, ctime.to_string())
}

#[test]
fn parse_unparse_4() {
    let time = "23:59";
    let ctime = ClockTime::parse(time).unwrap();
    assert_eq!(time, ctime.to_string())
}

#[test]
fn valid_time_test_1() {
    let time = ClockTime::parse("14:30").unwrap();
    assert_eq!(time.hour(), 14);
    assert_eq!(time.minute(), 30);
}

#[test]
fn valid_time_test_2() {
    assert_eq!(ClockTime::parse("00:00").unwrap(), ClockTime::from_hm(0, 0));
}

#[test]
fn invalid_time_test_1() {
    assert!(ClockTime::parse("14:3a").is_err())
}

#[test]
fn invalid_time_test_2() {
    assert!(ClockTime::parse("1430").is_err())
}

#[test]
fn invalid_time_test_3() {
    assert!(ClockTime::parse("25:00").is_err())
}

#[test]
fn invalid_time_test_4() {
    assert!(ClockTime::parse("12:60").is_err())
}

#[test]
fn ordering_matches_string_ordering() {
    let a = ClockTime::parse("09:15").unwrap();
    let b = ClockTime::parse("14:05").unwrap();
    assert!(a < b);
    assert!(a.to_string() < b.to_string());
}
