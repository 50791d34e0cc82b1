//! Tests for the domain models.

use super::*;
use crate::params::SearchBookings;

#[test]
fn venue_parses_canonical_names() {
    assert_eq!("Polideportivo".parse::<Venue>(), Ok(Venue::Polideportivo));
    assert_eq!("S.U.M.".parse::<Venue>(), Ok(Venue::Sum));
}

#[test]
fn venue_parses_loose_spellings() {
    assert_eq!("polideportivo".parse::<Venue>(), Ok(Venue::Polideportivo));
    assert_eq!("sum".parse::<Venue>(), Ok(Venue::Sum));
    assert_eq!(" s.u.m. ".parse::<Venue>(), Ok(Venue::Sum));
}

#[test]
fn venue_rejects_unknown_names() {
    assert!("gimnasio".parse::<Venue>().is_err());
    assert!("".parse::<Venue>().is_err());
}

#[test]
fn venue_round_trips_through_stored_string() {
    for venue in [Venue::Polideportivo, Venue::Sum] {
        assert_eq!(venue.as_str().parse::<Venue>(), Ok(venue));
    }
}

#[test]
fn filter_keeps_raw_id() {
    let params = SearchBookings {
        id: Some("abc".to_string()),
        ..Default::default()
    };

    let filter = BookingFilter::try_from(&params).expect("id is carried raw, never validated here");
    assert_eq!(filter.id, Some("abc".to_string()));
}

#[test]
fn filter_parses_venue_and_date() {
    let params = SearchBookings {
        requester: Some("Ana".to_string()),
        venue: Some("sum".to_string()),
        date: Some("2026-09-14".to_string()),
        ..Default::default()
    };

    let filter = BookingFilter::try_from(&params).expect("valid filters");
    assert_eq!(filter.requester_contains, Some("Ana".to_string()));
    assert_eq!(filter.venue, Some(Venue::Sum));
    assert_eq!(filter.date.map(|d| d.to_string()), Some("2026-09-14".to_string()));
}

#[test]
fn filter_rejects_malformed_venue_or_date() {
    let bad_venue = SearchBookings {
        venue: Some("warehouse".to_string()),
        ..Default::default()
    };
    assert!(BookingFilter::try_from(&bad_venue).is_err());

    let bad_date = SearchBookings {
        date: Some("14/09/2026".to_string()),
        ..Default::default()
    };
    assert!(BookingFilter::try_from(&bad_date).is_err());
}
