//! Venue enumeration for the bookable spaces.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the bookable venues.
///
/// The municipality currently rents out two shared spaces. Adding a venue
/// means adding a variant here plus its stored string in [`Venue::as_str`];
/// everything else (queries, availability, display) is venue-agnostic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    /// The sports hall
    #[default]
    Polideportivo,

    /// The multi-purpose room ("Salón de Usos Múltiples")
    Sum,
}

impl FromStr for Venue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "polideportivo" => Ok(Venue::Polideportivo),
            "s.u.m." | "sum" => Ok(Venue::Sum),
            _ => Err(format!("Unknown venue: {s}")),
        }
    }
}

impl Venue {
    /// Convert to the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Polideportivo => "Polideportivo",
            Venue::Sum => "S.U.M.",
        }
    }
}
