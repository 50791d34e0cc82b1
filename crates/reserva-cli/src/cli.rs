//! Command handlers and CLI argument wrappers.
//!
//! Each operation gets a small clap `Args` struct that converts into the
//! core's parameter type, keeping clap-specific concerns (flags, help
//! text, value delimiters) out of the core. The [`Cli`] struct pairs the
//! booking desk with the terminal renderer and, for reserve, writes the
//! booking's ticket file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use reserva_core::{
    params::{CheckAvailability, CreateBooking, DayQuery, Id, SearchBookings, WeeklyBooking},
    ticket_file_name, Booking, BookingDesk, Ticket,
};

use crate::renderer::TerminalRenderer;

/// Command-line argument representation of the venues.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum VenueArg {
    /// The sports hall
    Polideportivo,
    /// The multi-purpose room
    Sum,
}

impl std::fmt::Display for VenueArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VenueArg::Polideportivo => write!(f, "Polideportivo"),
            VenueArg::Sum => write!(f, "S.U.M."),
        }
    }
}

/// Book a venue for a single date
#[derive(Args)]
pub struct ReserveArgs {
    /// Venue to book
    pub venue: VenueArg,
    /// Booking date, YYYY-MM-DD
    pub date: String,
    /// Start hour, HH:MM
    pub start: String,
    /// End hour, HH:MM; at or before the start hour means the booking
    /// runs into the following day
    pub end: String,
    /// Name of the person the booking is for
    #[arg(short, long)]
    pub requester: String,
    /// Phone or other contact detail
    #[arg(short, long)]
    pub contact: String,
    /// Contact e-mail address
    #[arg(short, long)]
    pub email: String,
    /// Purpose of the booking
    #[arg(long)]
    pub reason: String,
}

impl From<ReserveArgs> for CreateBooking {
    fn from(val: ReserveArgs) -> Self {
        CreateBooking {
            venue: val.venue.to_string(),
            date: val.date,
            start: val.start,
            end: val.end,
            requester: val.requester,
            contact: val.contact,
            email: val.email,
            reason: val.reason,
        }
    }
}

/// Book a weekly recurring slot through the end of the month
#[derive(Args)]
pub struct WeeklyArgs {
    /// Venue to book
    pub venue: VenueArg,
    /// Start hour, HH:MM, shared by every generated booking
    pub start: String,
    /// End hour, HH:MM, shared by every generated booking
    pub end: String,
    /// Weekdays to book, comma-separated (e.g. mon,wed)
    #[arg(short, long, value_delimiter = ',')]
    pub weekdays: Vec<String>,
    /// Name of the person the bookings are for
    #[arg(short, long)]
    pub requester: String,
    /// Phone or other contact detail
    #[arg(short, long)]
    pub contact: String,
    /// Contact e-mail address
    #[arg(short, long)]
    pub email: String,
    /// Purpose of the bookings
    #[arg(long)]
    pub reason: String,
}

impl From<WeeklyArgs> for WeeklyBooking {
    fn from(val: WeeklyArgs) -> Self {
        WeeklyBooking {
            venue: val.venue.to_string(),
            start: val.start,
            end: val.end,
            requester: val.requester,
            contact: val.contact,
            email: val.email,
            reason: val.reason,
            weekdays: val.weekdays,
        }
    }
}

/// Cancel a booking
#[derive(Args)]
pub struct CancelArgs {
    /// ID of the booking to cancel
    #[arg(help = "Unique identifier of the booking to cancel")]
    pub id: u64,
}

impl From<CancelArgs> for Id {
    fn from(val: CancelArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show details of one booking
#[derive(Args)]
pub struct ShowArgs {
    /// ID of the booking to display
    #[arg(help = "Unique identifier of the booking to show details for")]
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// Search bookings by id, requester, venue or date
///
/// Filters combine; a given --id wins outright and the other filters are
/// ignored. An id that is not a number simply matches nothing.
#[derive(Args)]
pub struct SearchArgs {
    /// Booking id, exact match
    #[arg(long)]
    pub id: Option<String>,
    /// Substring of the requester name
    #[arg(short, long)]
    pub requester: Option<String>,
    /// Venue, exact match
    #[arg(short, long)]
    pub venue: Option<VenueArg>,
    /// Date, YYYY-MM-DD, exact match
    #[arg(short, long)]
    pub date: Option<String>,
}

impl From<SearchArgs> for SearchBookings {
    fn from(val: SearchArgs) -> Self {
        SearchBookings {
            id: val.id,
            requester: val.requester,
            venue: val.venue.map(|v| v.to_string()),
            date: val.date,
        }
    }
}

/// Show a venue's occupancy for one day
#[derive(Args)]
pub struct DayArgs {
    /// Venue to inspect
    pub venue: VenueArg,
    /// Date, YYYY-MM-DD
    pub date: String,
}

impl From<DayArgs> for DayQuery {
    fn from(val: DayArgs) -> Self {
        DayQuery {
            venue: val.venue.to_string(),
            date: val.date,
        }
    }
}

/// Check whether a time slot is free
#[derive(Args)]
pub struct CheckArgs {
    /// Venue to check
    pub venue: VenueArg,
    /// Date, YYYY-MM-DD
    pub date: String,
    /// Start hour, HH:MM
    pub start: String,
    /// End hour, HH:MM
    pub end: String,
}

impl From<CheckArgs> for CheckAvailability {
    fn from(val: CheckArgs) -> Self {
        CheckAvailability {
            venue: val.venue.to_string(),
            date: val.date,
            start: val.start,
            end: val.end,
        }
    }
}

/// Dispatches parsed commands against the booking desk and renders the
/// results.
pub struct Cli {
    desk: BookingDesk,
    renderer: TerminalRenderer,
    tickets_dir: Option<PathBuf>,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(desk: BookingDesk, renderer: TerminalRenderer, tickets_dir: Option<PathBuf>) -> Self {
        Self {
            desk,
            renderer,
            tickets_dir,
        }
    }

    /// Book a single slot and write its ticket file.
    pub async fn reserve(&self, args: ReserveArgs) -> Result<()> {
        let params: CreateBooking = args.into();
        let result = self.desk.reserve_result(&params).await?;
        self.renderer.render(&result.to_string())?;

        let path = self.write_ticket(&result.resource)?;
        self.renderer
            .render(&format!("\nTicket written to {}\n", path.display()))?;
        Ok(())
    }

    /// Expand a weekly recurrence and report the outcome.
    pub async fn weekly(&self, args: WeeklyArgs) -> Result<()> {
        let params: WeeklyBooking = args.into();
        let report = self.desk.weekly_report(&params).await?;
        self.renderer.render(&report.to_string())
    }

    /// Cancel a booking by id.
    pub async fn cancel(&self, args: CancelArgs) -> Result<()> {
        let params: Id = args.into();
        match self.desk.cancel_result(&params).await? {
            Some(result) => self.renderer.render(&result.to_string()),
            None => self
                .renderer
                .render(&format!("No booking with ID {}.\n", params.id)),
        }
    }

    /// Show one booking.
    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let params: Id = args.into();
        match self.desk.booking(&params).await? {
            Some(booking) => self.renderer.render(&booking.to_string()),
            None => self
                .renderer
                .render(&format!("No booking with ID {}.\n", params.id)),
        }
    }

    /// List every booking, newest first.
    pub async fn list(&self) -> Result<()> {
        let bookings = self.desk.list_all().await?;
        self.renderer.render(&bookings.to_string())
    }

    /// Search bookings with the given filters.
    pub async fn search(&self, args: SearchArgs) -> Result<()> {
        let params: SearchBookings = args.into();
        let bookings = self.desk.search_results(&params).await?;
        self.renderer.render(&bookings.to_string())
    }

    /// Show one venue's occupancy for a day.
    pub async fn day(&self, args: DayArgs) -> Result<()> {
        let params: DayQuery = args.into();
        let schedule = self.desk.day_view(&params).await?;
        self.renderer.render(&schedule.to_string())
    }

    /// Check whether a slot is free.
    pub async fn check(&self, args: CheckArgs) -> Result<()> {
        let params: CheckAvailability = args.into();
        let status = self.desk.availability_status(&params).await?;
        self.renderer.render(&status.to_string())
    }

    /// Write the booking's ticket under the configured directory and
    /// return the path.
    fn write_ticket(&self, booking: &Booking) -> Result<PathBuf> {
        let dir = match &self.tickets_dir {
            Some(dir) => dir.clone(),
            None => default_tickets_dir()?,
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create tickets directory {}", dir.display()))?;

        let path = dir.join(ticket_file_name(booking));
        std::fs::write(&path, Ticket(booking).to_string())
            .with_context(|| format!("Failed to write ticket {}", path.display()))?;
        Ok(path)
    }
}

/// Default ticket directory following XDG Base Directory specification.
fn default_tickets_dir() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("reserva")
        .create_data_directory("tickets")
        .context("Failed to resolve tickets directory")
}
