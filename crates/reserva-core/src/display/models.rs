//! Display implementations for domain models.
//!
//! Markdown-flavored output: a booking renders as a header plus metadata
//! lines, a slot as a single occupancy line for the day view.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Booking, Slot, Venue};

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {} on {}", self.id, self.venue, self.date)?;
        writeln!(f)?;
        writeln!(f, "- Hours: {} - {}", self.start_time, self.end_time)?;
        writeln!(f, "- Requested by: {}", self.requester)?;
        writeln!(f, "- Contact: {} / {}", self.contact, self.email)?;
        writeln!(f, "- Reason: {}", self.reason)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        Ok(())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} - {}  {}  (booking {})",
            self.start_time, self.end_time, self.requester, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    #[test]
    fn booking_display_has_header_and_fields() {
        let booking = Booking {
            id: 3,
            venue: Venue::Polideportivo,
            date: "2026-09-14".parse().unwrap(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            requester: "Ana Pérez".to_string(),
            contact: "555-0101".to_string(),
            email: "ana@example.com".to_string(),
            reason: "Basketball practice".to_string(),
            created_at: Timestamp::from_second(1_640_995_200).unwrap(),
        };

        let output = format!("{booking}");
        assert!(output.starts_with("# 3. Polideportivo on 2026-09-14"));
        assert!(output.contains("- Hours: 09:00 - 10:00"));
        assert!(output.contains("- Requested by: Ana Pérez"));
        assert!(output.contains("- Contact: 555-0101 / ana@example.com"));
        assert!(output.contains("- Reason: Basketball practice"));
    }

    #[test]
    fn slot_display_is_one_line() {
        let slot = Slot {
            id: 9,
            start_time: "18:00".to_string(),
            end_time: "20:00".to_string(),
            requester: "Club de ajedrez".to_string(),
        };

        let output = format!("{slot}");
        assert_eq!(output, "- 18:00 - 20:00  Club de ajedrez  (booking 9)\n");
    }
}
