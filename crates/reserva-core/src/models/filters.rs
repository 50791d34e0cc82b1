//! Filter types for querying bookings.

use jiff::civil::Date;

use super::Venue;
use crate::{
    availability,
    error::{DeskError, Result},
    params::SearchBookings,
};

/// Filter options for searching bookings.
///
/// When `id` is set it wins outright: the search becomes a point lookup and
/// every other filter is ignored. An id that does not parse as an integer
/// can never match a row, so the search yields an empty result instead of
/// an error. Without an id, the remaining filters combine conjunctively.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    /// Raw booking id as entered by the user; parsed leniently
    pub id: Option<String>,

    /// Substring match on the requester name
    pub requester_contains: Option<String>,

    /// Exact venue match
    pub venue: Option<Venue>,

    /// Exact date match
    pub date: Option<Date>,
}

impl TryFrom<&SearchBookings> for BookingFilter {
    type Error = DeskError;

    /// Parse the user-entered search strings into a typed filter.
    ///
    /// Venue and date filters must be well-formed when present; the id is
    /// deliberately carried through raw so the store can apply its
    /// unparsable-id-matches-nothing fallback.
    fn try_from(params: &SearchBookings) -> Result<Self> {
        let venue = match &params.venue {
            Some(raw) => Some(
                raw.parse::<Venue>()
                    .map_err(|reason| DeskError::invalid_input("venue", reason))?,
            ),
            None => None,
        };
        let date = match &params.date {
            Some(raw) => Some(availability::parse_date(raw)?),
            None => None,
        };

        Ok(Self {
            id: params.id.clone(),
            requester_contains: params.requester.clone(),
            venue,
            date,
        })
    }
}
