use crate::modules::attendance::core::ledger::TimeEntry;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::{local_date, round_money};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

pub const DAILY_OVERTIME_THRESHOLD_MINUTES: i64 = 8 * 60;
pub const OVERTIME_MULTIPLIER: Decimal = dec!(1.5);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayPeriodSummary {
    pub regular_hours: Decimal,
    pub overtime_hours: Decimal,
    pub regular_pay: Decimal,
    pub overtime_pay: Decimal,
    pub total_pay: Decimal,
}

/// Regular and overtime minutes, unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinuteSplit {
    pub regular: i64,
    pub overtime: i64,
}

impl MinuteSplit {
    /// Daily rule: everything past eight hours is overtime.
    pub fn of_day(total_minutes: i64) -> Self {
        let total = total_minutes.max(0);
        Self {
            regular: total.min(DAILY_OVERTIME_THRESHOLD_MINUTES),
            overtime: (total - DAILY_OVERTIME_THRESHOLD_MINUTES).max(0),
        }
    }

    /// Splits one entry given the minutes already worked earlier that day.
    pub fn of_entry(minutes_before: i64, duration_minutes: i64) -> Self {
        let room = (DAILY_OVERTIME_THRESHOLD_MINUTES - minutes_before).max(0);
        let regular = duration_minutes.min(room);
        Self {
            regular,
            overtime: duration_minutes - regular,
        }
    }

    pub fn add(self, other: MinuteSplit) -> Self {
        Self {
            regular: self.regular + other.regular,
            overtime: self.overtime + other.overtime,
        }
    }
}

fn replacement_rank(entry: &TimeEntry) -> (Option<DateTime<Utc>>, &str) {
    (entry.approved_at, entry.id.as_str())
}

/// Ids replaced by a correction present in the same set. When one entry was
/// corrected more than once, only its most recently approved replacement
/// stands and the older replacements count as superseded too.
pub fn superseded_ids(entries: &[TimeEntry]) -> HashSet<&str> {
    let mut superseded = HashSet::new();
    let mut standing: HashMap<&str, &TimeEntry> = HashMap::new();
    for entry in entries.iter().filter(|e| e.approval_status.counts_toward_pay()) {
        let Some(original) = entry.supersedes.as_deref() else {
            continue;
        };
        superseded.insert(original);
        match standing.get(original) {
            Some(current) if replacement_rank(current) >= replacement_rank(entry) => {
                superseded.insert(entry.id.as_str());
            }
            Some(current) => {
                superseded.insert(current.id.as_str());
                standing.insert(original, entry);
            }
            None => {
                standing.insert(original, entry);
            }
        }
    }
    superseded
}

/// Closed work entries that are pending or approved and not corrected away.
pub fn payable_entries(entries: &[TimeEntry]) -> Vec<&TimeEntry> {
    let superseded = superseded_ids(entries);
    entries
        .iter()
        .filter(|e| e.is_work() && !e.is_open())
        .filter(|e| e.approval_status.counts_toward_pay())
        .filter(|e| !superseded.contains(e.id.as_str()))
        .collect()
}

/// Exact hours, never rounded.
pub fn hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// Rounds money once, after the period totals are known. Hours stay exact.
pub fn summarize(split: MinuteSplit, hourly_rate: Decimal) -> PayPeriodSummary {
    let sixty = Decimal::from(60);
    let regular_pay = Decimal::from(split.regular) * hourly_rate / sixty;
    let overtime_pay = Decimal::from(split.overtime) * hourly_rate * OVERTIME_MULTIPLIER / sixty;
    PayPeriodSummary {
        regular_hours: hours(split.regular),
        overtime_hours: hours(split.overtime),
        regular_pay: round_money(regular_pay),
        overtime_pay: round_money(overtime_pay),
        total_pay: round_money(regular_pay + overtime_pay),
    }
}

fn check_rate(hourly_rate: Decimal) -> Result<(), ApplicationError> {
    if hourly_rate < Decimal::ZERO {
        return Err(ApplicationError::Validation(format!(
            "hourly rate must not be negative, got {hourly_rate}"
        )));
    }
    Ok(())
}

/// Pay for a single period, the daily overtime rule applied to the whole set.
pub fn compute_pay(
    entries: &[TimeEntry],
    hourly_rate: Decimal,
) -> Result<PayPeriodSummary, ApplicationError> {
    check_rate(hourly_rate)?;
    let total: i64 = payable_entries(entries)
        .iter()
        .filter_map(|e| e.duration_minutes)
        .sum();
    Ok(summarize(MinuteSplit::of_day(total), hourly_rate))
}

/// Payable minutes per local calendar day.
pub fn daily_minutes(entries: &[TimeEntry], timezone: FixedOffset) -> BTreeMap<NaiveDate, i64> {
    let mut days = BTreeMap::new();
    for entry in payable_entries(entries) {
        let minutes = entry.duration_minutes.unwrap_or_default();
        *days.entry(local_date(entry.clock_in, timezone)).or_insert(0) += minutes;
    }
    days
}

/// Pay over several days, overtime decided day by day.
pub fn compute_pay_by_day(
    days: &BTreeMap<NaiveDate, i64>,
    hourly_rate: Decimal,
) -> Result<PayPeriodSummary, ApplicationError> {
    check_rate(hourly_rate)?;
    let split = days
        .values()
        .map(|minutes| MinuteSplit::of_day(*minutes))
        .fold(MinuteSplit::default(), MinuteSplit::add);
    Ok(summarize(split, hourly_rate))
}
