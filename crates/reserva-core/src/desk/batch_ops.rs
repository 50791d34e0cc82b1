//! Weekly batch operation for the BookingDesk.

use tokio::task;

use super::BookingDesk;
use crate::{
    db::Database,
    error::{DeskError, Result},
    models::BatchOutcome,
    params::WeeklyBooking,
};

impl BookingDesk {
    /// Expands a weekly request into individual bookings, from today
    /// through the end of the current month.
    ///
    /// The whole batch runs on one connection; each candidate date gets
    /// its own check-then-insert, so a taken date is reported in the
    /// outcome and never blocks the remaining dates. The loop runs to
    /// completion once started.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - empty weekday set or a failed field
    ///   validation; nothing is inserted
    /// * `DeskError::Database` - the store failed mid-batch; dates already
    ///   booked stay booked
    pub async fn schedule_weekly(&self, params: &WeeklyBooking) -> Result<BatchOutcome> {
        // Fail fast before spawning; the store validates again on its own.
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();
        let today = jiff::Zoned::now().date();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_weekly(&params, today)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
