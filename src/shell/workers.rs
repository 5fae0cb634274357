use chrono::{Datelike, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info};

use crate::modules::payroll::use_cases::year_end_carryover::handler::YearEndCarryoverHandler;

/// Rolls last year's sick leave balances into the current year on every
/// tick. Reruns are no-ops once a target-year balance exists.
pub fn spawn_carryover_worker(
    handler: Arc<YearEndCarryoverHandler>,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let now = Utc::now();
            let from_year = now.year() - 1;
            match handler.handle(from_year, now).await {
                Ok(report) if !report.carried.is_empty() => {
                    info!(from_year, carried = report.carried.len(), "carryover worker tick");
                }
                Ok(_) => {}
                Err(e) => error!(from_year, error = %e, "carryover worker tick failed"),
            }
        }
    })
}
