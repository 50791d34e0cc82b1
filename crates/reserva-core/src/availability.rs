//! Pure interval logic for the availability check.
//!
//! Everything here is calendar arithmetic over `jiff` civil types, with no
//! storage access: the store fetches a day's slots and hands them to
//! [`conflicts`]. Intervals are half-open `[start, end)`, so a booking that
//! ends at 10:00 never collides with one that starts at 10:00.
//!
//! An end hour numerically at or before the start hour means the booking
//! crosses midnight; [`effective_interval`] moves the end instant onto the
//! following day before any comparison (22:00 to 02:00 is a four-hour
//! interval, not an empty or negative one).

use jiff::civil::{Date, DateTime, Time};
use log::warn;

use crate::{
    error::{DeskError, Result},
    models::Slot,
};

/// Parse a user-entered or stored `HH:MM` hour.
pub fn parse_time(s: &str) -> Result<Time> {
    Time::strptime("%H:%M", s)
        .map_err(|_| DeskError::invalid_input("time", format!("'{s}' is not a valid HH:MM hour")))
}

/// Parse a user-entered or stored `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<Date> {
    Date::strptime("%Y-%m-%d", s).map_err(|_| {
        DeskError::invalid_input("date", format!("'{s}' is not a valid YYYY-MM-DD date"))
    })
}

/// Format an hour back into its canonical `HH:MM` stored form.
pub fn format_time(t: Time) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Compose a date with start/end hours into the effective instant pair,
/// normalizing overnight bookings onto the following day.
pub fn effective_interval(date: Date, start: Time, end: Time) -> Result<(DateTime, DateTime)> {
    let start_at = date.to_datetime(start);
    let end_at = if end <= start {
        date.tomorrow()
            .map_err(|_| {
                DeskError::invalid_input("date", "booking date is outside the supported range")
            })?
            .to_datetime(end)
    } else {
        date.to_datetime(end)
    };
    Ok((start_at, end_at))
}

/// Half-open interval overlap: `[s1, e1)` and `[s2, e2)` collide iff
/// `s1 < e2 && e1 > s2`. Touching endpoints do not collide.
pub fn overlaps(a: (DateTime, DateTime), b: (DateTime, DateTime)) -> bool {
    a.0 < b.1 && a.1 > b.0
}

/// Whether the candidate interval collides with any existing slot on the
/// same venue/date.
///
/// A stored slot whose hours no longer parse is treated as a conflict:
/// corrupt data blocks the day rather than silently double-booking it. The
/// row is logged so it can be found and fixed.
pub fn conflicts(date: Date, start: Time, end: Time, existing: &[Slot]) -> Result<bool> {
    let candidate = effective_interval(date, start, end)?;

    for slot in existing {
        let (Ok(slot_start), Ok(slot_end)) =
            (parse_time(&slot.start_time), parse_time(&slot.end_time))
        else {
            warn!(
                "booking {} has unparsable hours '{}'..'{}'; treating the slot as a conflict",
                slot.id, slot.start_time, slot.end_time
            );
            return Ok(true);
        };

        if overlaps(candidate, effective_interval(date, slot_start, slot_end)?) {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(start: &str, end: &str) -> Slot {
        Slot {
            id: 1,
            start_time: start.to_string(),
            end_time: end.to_string(),
            requester: "Ana".to_string(),
        }
    }

    fn date() -> Date {
        "2026-09-14".parse().unwrap()
    }

    #[test]
    fn parse_time_accepts_hh_mm() {
        let t = parse_time("22:05").expect("valid hour");
        assert_eq!((t.hour(), t.minute()), (22, 5));
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("22:00:30").is_err());
        assert!(parse_time("ten o'clock").is_err());
        assert!(parse_time("").is_err());
    }

    #[test]
    fn format_time_is_zero_padded() {
        let t = parse_time("9:05").expect("single-digit hour parses");
        assert_eq!(format_time(t), "09:05");
    }

    #[test]
    fn effective_interval_same_day() {
        let (s, e) = effective_interval(
            date(),
            parse_time("09:00").unwrap(),
            parse_time("10:00").unwrap(),
        )
        .unwrap();
        assert_eq!(s.date(), date());
        assert_eq!(e.date(), date());
        assert!(s < e);
    }

    #[test]
    fn effective_interval_overnight_spans_four_hours() {
        let (s, e) = effective_interval(
            date(),
            parse_time("22:00").unwrap(),
            parse_time("02:00").unwrap(),
        )
        .unwrap();
        assert_eq!(s, date().at(22, 0, 0, 0));
        assert_eq!(e, date().tomorrow().unwrap().at(2, 0, 0, 0));
    }

    #[test]
    fn effective_interval_equal_hours_is_full_day() {
        let (s, e) = effective_interval(
            date(),
            parse_time("08:00").unwrap(),
            parse_time("08:00").unwrap(),
        )
        .unwrap();
        assert_eq!(s, date().at(8, 0, 0, 0));
        assert_eq!(e, date().tomorrow().unwrap().at(8, 0, 0, 0));
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let a = effective_interval(
            date(),
            parse_time("09:00").unwrap(),
            parse_time("10:00").unwrap(),
        )
        .unwrap();
        let b = effective_interval(
            date(),
            parse_time("10:00").unwrap(),
            parse_time("11:00").unwrap(),
        )
        .unwrap();
        assert!(!overlaps(a, b));
        assert!(!overlaps(b, a));
    }

    #[test]
    fn contained_interval_overlaps() {
        let outer = effective_interval(
            date(),
            parse_time("09:00").unwrap(),
            parse_time("12:00").unwrap(),
        )
        .unwrap();
        let inner = effective_interval(
            date(),
            parse_time("10:00").unwrap(),
            parse_time("11:00").unwrap(),
        )
        .unwrap();
        assert!(overlaps(outer, inner));
        assert!(overlaps(inner, outer));
    }

    #[test]
    fn overnight_candidate_conflicts_with_late_slot() {
        let existing = vec![slot("23:00", "23:30")];
        let hit = conflicts(
            date(),
            parse_time("22:00").unwrap(),
            parse_time("02:00").unwrap(),
            &existing,
        )
        .unwrap();
        assert!(hit);
    }

    #[test]
    fn overnight_slot_does_not_block_earlier_hours() {
        let existing = vec![slot("22:00", "02:00")];
        let hit = conflicts(
            date(),
            parse_time("20:00").unwrap(),
            parse_time("22:00").unwrap(),
            &existing,
        )
        .unwrap();
        assert!(!hit);
    }

    #[test]
    fn empty_day_never_conflicts() {
        let hit = conflicts(
            date(),
            parse_time("09:00").unwrap(),
            parse_time("10:00").unwrap(),
            &[],
        )
        .unwrap();
        assert!(!hit);
    }

    #[test]
    fn corrupt_slot_fails_closed() {
        let existing = vec![slot("whenever", "10:00")];
        let hit = conflicts(
            date(),
            parse_time("15:00").unwrap(),
            parse_time("16:00").unwrap(),
            &existing,
        )
        .unwrap();
        assert!(hit, "unparsable stored hours must read as a conflict");
    }
}
