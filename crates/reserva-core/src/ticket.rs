//! Printable ticket snapshot for a booking.
//!
//! The core's obligation to the ticket renderer is a complete, immutable
//! snapshot of one booking plus a deterministic file name. [`Ticket`]
//! formats the snapshot as a fixed-layout text document; where the file
//! lands is the frontend's business.

use std::fmt;

use crate::{display::LocalDateTime, models::Booking};

/// Deterministic ticket file name: booking id + requester + date.
///
/// The same booking always maps to the same name, so re-printing a ticket
/// overwrites the previous copy instead of piling up duplicates.
pub fn ticket_file_name(booking: &Booking) -> String {
    format!(
        "ticket_{}_{}_{}.txt",
        booking.id,
        slug(&booking.requester),
        booking.date
    )
}

/// Reduce a requester name to a filesystem-safe lowercase slug.
fn slug(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    if out.is_empty() {
        out.push_str("booking");
    }
    out
}

/// Display wrapper rendering one booking as a fixed-layout ticket.
pub struct Ticket<'a>(pub &'a Booking);

impl fmt::Display for Ticket<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        writeln!(f, "==============================================")?;
        writeln!(f, "              BOOKING TICKET")?;
        writeln!(f, "==============================================")?;
        writeln!(f, " Booking no.  : {}", b.id)?;
        writeln!(f, " Venue        : {}", b.venue.as_str())?;
        writeln!(f, " Date         : {}", b.date)?;
        writeln!(f, " Hours        : {} - {}", b.start_time, b.end_time)?;
        writeln!(f, " Requested by : {}", b.requester)?;
        writeln!(f, " Contact      : {}", b.contact)?;
        writeln!(f, " Email        : {}", b.email)?;
        writeln!(f, " Reason       : {}", b.reason)?;
        writeln!(f, " Issued       : {}", LocalDateTime(&b.created_at))?;
        writeln!(f, "==============================================")
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Venue;

    fn booking() -> Booking {
        Booking {
            id: 7,
            venue: Venue::Sum,
            date: "2026-09-14".parse().unwrap(),
            start_time: "18:00".to_string(),
            end_time: "20:00".to_string(),
            requester: "Ana Pérez".to_string(),
            contact: "555-0101".to_string(),
            email: "ana@example.com".to_string(),
            reason: "Club meetup".to_string(),
            created_at: Timestamp::from_second(1_640_995_200).unwrap(),
        }
    }

    #[test]
    fn file_name_is_deterministic() {
        let b = booking();
        assert_eq!(ticket_file_name(&b), ticket_file_name(&b));
        assert_eq!(ticket_file_name(&b), "ticket_7_ana-p-rez_2026-09-14.txt");
    }

    #[test]
    fn slug_collapses_non_alphanumerics() {
        assert_eq!(slug("Ana  María!"), "ana-mar-a");
        assert_eq!(slug("---"), "booking");
        assert_eq!(slug("Club_de_ajedrez"), "club-de-ajedrez");
    }

    #[test]
    fn ticket_contains_every_field() {
        let b = booking();
        let text = Ticket(&b).to_string();
        assert!(text.contains("BOOKING TICKET"));
        assert!(text.contains("Booking no.  : 7"));
        assert!(text.contains("S.U.M."));
        assert!(text.contains("2026-09-14"));
        assert!(text.contains("18:00 - 20:00"));
        assert!(text.contains("Ana Pérez"));
        assert!(text.contains("555-0101"));
        assert!(text.contains("ana@example.com"));
        assert!(text.contains("Club meetup"));
    }
}
