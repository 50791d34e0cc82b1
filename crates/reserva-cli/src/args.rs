use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CancelArgs, CheckArgs, DayArgs, ReserveArgs, SearchArgs, ShowArgs, WeeklyArgs,
};

/// Main command-line interface for the reserva booking tool
///
/// Reserva manages hourly bookings of two shared venues (the
/// "Polideportivo" sports hall and the "S.U.M." multi-purpose room),
/// backed by a local SQLite database. It checks every new booking against
/// the day's existing reservations, understands slots that cross midnight,
/// and can expand a weekly recurrence over the rest of the month.
#[derive(Parser)]
#[command(version, about, name = "rsv")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/reserva/reserva.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Directory where ticket files are written. Defaults to
    /// $XDG_DATA_HOME/reserva/tickets
    #[arg(long, global = true)]
    pub tickets_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the reserva CLI
///
/// Running without a command lists all bookings, newest first.
#[derive(Subcommand)]
pub enum Commands {
    /// Book a venue for a single date
    #[command(alias = "r")]
    Reserve(ReserveArgs),
    /// Book a weekly recurring slot through the end of the month
    #[command(alias = "w")]
    Weekly(WeeklyArgs),
    /// Cancel a booking
    #[command(aliases = ["c", "rm"])]
    Cancel(CancelArgs),
    /// Show details of one booking
    #[command(alias = "s")]
    Show(ShowArgs),
    /// List all bookings, newest first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Search bookings by id, requester, venue or date
    #[command(alias = "f")]
    Search(SearchArgs),
    /// Show a venue's occupancy for one day
    #[command(alias = "d")]
    Day(DayArgs),
    /// Check whether a time slot is free
    Check(CheckArgs),
}
