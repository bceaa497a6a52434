//! # Timer
//!
//! A schedule rule that plays a sequence of pages.
//!
//! ## Wire Body
//!
//! ```text
//! 1 02 03 ABCD
//! │ │  │  └── pages to play, in order (1..=32 letters)
//! │ │  └───── minute, "**" = every minute
//! │ └──────── hour,   "**" = every hour
//! └────────── day of week (0-6), "*" = every day
//! ```
//!
//! Hour and minute both accept 0..=59. The device tooling has always
//! accepted hours above 23 and existing sign setups rely on it.

use std::fmt;

use crate::error::{ProliteError, Result};
use crate::protocol::commands::{MAX_SEQUENCE_LEN, PAGE_SLOTS, slot_key};

/// Input value meaning "every day / hour / minute".
pub const WILDCARD: i32 = -1;

/// # Timer
///
/// Validated on construction and immutable afterwards.
///
/// ## Example
///
/// ```
/// use prolite::models::Timer;
///
/// let timer = Timer::new(-1, 8, 30, &[0, 1, 2])?;
/// assert_eq!(timer.day_of_week_field(), "*");
/// assert_eq!(timer.hour_field(), "08");
/// assert_eq!(timer.to_string(), "*0830ABC");
/// # Ok::<(), prolite::ProliteError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    day_of_week: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    sequence: Vec<u8>,
}

impl Timer {
    /// Build a timer.
    ///
    /// `day_of_week` is 0..=6, `hour` and `minute` are 0..=59; pass
    /// [`WILDCARD`] (-1) for any of them to match every value. `sequence`
    /// holds 1..=32 page indices in 0..=25.
    pub fn new(day_of_week: i32, hour: i32, minute: i32, sequence: &[i32]) -> Result<Self> {
        let day_of_week = field(day_of_week, 6).ok_or(ProliteError::InvalidDayOfWeek(day_of_week))?;
        let hour = field(hour, 59).ok_or(ProliteError::InvalidHour(hour))?;
        let minute = field(minute, 59).ok_or(ProliteError::InvalidMinute(minute))?;

        if !(1..=MAX_SEQUENCE_LEN).contains(&sequence.len()) {
            return Err(ProliteError::InvalidSequenceLength(sequence.len()));
        }

        let sequence = sequence
            .iter()
            .map(|&page| {
                u8::try_from(page)
                    .ok()
                    .filter(|&p| (p as usize) < PAGE_SLOTS)
                    .ok_or(ProliteError::InvalidSequencePage(page))
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self {
            day_of_week,
            hour,
            minute,
            sequence,
        })
    }

    /// Day of week (0-6), `None` for every day.
    #[inline]
    pub fn day_of_week(&self) -> Option<u8> {
        self.day_of_week
    }

    /// Hour, `None` for every hour.
    #[inline]
    pub fn hour(&self) -> Option<u8> {
        self.hour
    }

    /// Minute, `None` for every minute.
    #[inline]
    pub fn minute(&self) -> Option<u8> {
        self.minute
    }

    /// Page indices played in order.
    #[inline]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Rendered day field: one digit or `*`.
    pub fn day_of_week_field(&self) -> String {
        self.day_of_week
            .map_or_else(|| "*".to_string(), |d| d.to_string())
    }

    /// Rendered hour field: two digits or `**`.
    pub fn hour_field(&self) -> String {
        two_digit_field(self.hour)
    }

    /// Rendered minute field: two digits or `**`.
    pub fn minute_field(&self) -> String {
        two_digit_field(self.minute)
    }

    /// Sequence as page letters, e.g. `[0, 1, 2]` → `"ABC"`.
    pub fn sequence_as_page_ids(&self) -> String {
        self.sequence.iter().map(|&p| slot_key(p as usize)).collect()
    }
}

impl fmt::Display for Timer {
    /// The wire body `{day}{hour}{minute}{sequence}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.day_of_week_field(),
            self.hour_field(),
            self.minute_field(),
            self.sequence_as_page_ids()
        )
    }
}

/// Map a field input to `Some(None)` for the wildcard, `Some(Some(v))` for a
/// value within `0..=max`, and `None` when out of range.
fn field(value: i32, max: u8) -> Option<Option<u8>> {
    if value == WILDCARD {
        return Some(None);
    }
    u8::try_from(value).ok().filter(|&v| v <= max).map(Some)
}

fn two_digit_field(value: Option<u8>) -> String {
    value.map_or_else(|| "**".to_string(), |v| format!("{:02}", v))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stores_fields() {
        let timer = Timer::new(1, 2, 3, &[1]).unwrap();
        assert_eq!(timer.day_of_week(), Some(1));
        assert_eq!(timer.hour(), Some(2));
        assert_eq!(timer.minute(), Some(3));
        assert_eq!(timer.day_of_week_field(), "1");
        assert_eq!(timer.hour_field(), "02");
        assert_eq!(timer.minute_field(), "03");
        assert_eq!(timer.sequence(), &[1]);
    }

    #[test]
    fn test_wildcards() {
        let timer = Timer::new(-1, -1, -1, &[0]).unwrap();
        assert_eq!(timer.day_of_week(), None);
        assert_eq!(timer.day_of_week_field(), "*");
        assert_eq!(timer.hour_field(), "**");
        assert_eq!(timer.minute_field(), "**");
        assert_eq!(timer.to_string(), "*****A");
    }

    #[test]
    fn test_sequence_letters() {
        let timer = Timer::new(1, 2, 3, &[0, 1, 2, 3]).unwrap();
        assert_eq!(timer.sequence_as_page_ids(), "ABCD");
        assert_eq!(timer.to_string(), "10203ABCD");
    }

    #[test]
    fn test_accepts_sequence_lengths() {
        let mut sequence = vec![0];
        for i in 0..31 {
            assert!(Timer::new(1, 2, 3, &sequence).is_ok());
            sequence.push(i % 26);
        }
        assert_eq!(sequence.len(), 32);
        assert!(Timer::new(1, 2, 3, &sequence).is_ok());
    }

    #[test]
    fn test_accepts_hours_up_to_59() {
        let timer = Timer::new(0, 59, 59, &[25]).unwrap();
        assert_eq!(timer.to_string(), "05959Z");
    }

    #[test]
    fn test_rejects_days_of_week() {
        for day in [-2, 7, 8] {
            let err = Timer::new(day, 0, 0, &[1]).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid timer day of week {}", day));
        }
    }

    #[test]
    fn test_rejects_hours_and_minutes() {
        for value in [-2, 60, 61] {
            let err = Timer::new(0, value, 0, &[1]).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid timer hour {}", value));

            let err = Timer::new(0, 0, value, &[1]).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid timer minute {}", value));
        }
    }

    #[test]
    fn test_rejects_sequences() {
        let err = Timer::new(0, 0, 0, &[]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid timer sequence length 0");

        let long: Vec<i32> = (0..33).map(|i| i % 26).collect();
        let err = Timer::new(0, 0, 0, &long).unwrap_err();
        assert_eq!(err.to_string(), "Invalid timer sequence length 33");

        let err = Timer::new(0, 0, 0, &[-1]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid timer sequence page -1");

        let err = Timer::new(0, 0, 0, &[0, 26]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid timer sequence page 26");
    }

    #[test]
    fn test_day_checked_before_sequence() {
        let err = Timer::new(9, 0, 0, &[]).unwrap_err();
        assert!(matches!(err, ProliteError::InvalidDayOfWeek(9)));
    }
}
