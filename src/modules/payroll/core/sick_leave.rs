use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const MAX_CARRYOVER_HOURS: Decimal = dec!(40);
pub const FRONTLOAD_HOURS: Decimal = dec!(40);
pub const MAX_BALANCE_HOURS: Decimal = dec!(80);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickLeaveBalance {
    pub employee_id: String,
    pub organization_id: String,
    pub year: i32,
    pub total_hours: Decimal,
    pub used_hours: Decimal,
    #[serde(default)]
    pub carryover_from_previous_year: Decimal,
    #[serde(default = "default_balance_cap")]
    pub max_balance_cap: Decimal,
}

fn default_balance_cap() -> Decimal {
    MAX_BALANCE_HOURS
}

impl SickLeaveBalance {
    /// A balance with nothing carried in from the year before.
    pub fn new(
        employee_id: impl Into<String>,
        organization_id: impl Into<String>,
        year: i32,
        total_hours: Decimal,
        used_hours: Decimal,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            organization_id: organization_id.into(),
            year,
            total_hours,
            used_hours,
            carryover_from_previous_year: Decimal::ZERO,
            max_balance_cap: MAX_BALANCE_HOURS,
        }
    }

    /// Non-negative hours, carryover within its limit and the total within
    /// the balance's cap, which itself never exceeds the yearly maximum.
    pub fn is_compliant(&self) -> bool {
        !self.total_hours.is_sign_negative()
            && !self.used_hours.is_sign_negative()
            && !self.carryover_from_previous_year.is_sign_negative()
            && self.carryover_from_previous_year <= MAX_CARRYOVER_HOURS
            && self.max_balance_cap <= MAX_BALANCE_HOURS
            && self.total_hours <= self.max_balance_cap
    }

    pub fn remaining_hours(&self) -> Decimal {
        (self.total_hours - self.used_hours).max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceChangeReason {
    Carryover,
    Frontload,
}

/// Immutable audit row, one per accrual or carryover step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceHistoryRow {
    pub employee_id: String,
    pub year: i32,
    pub reason: BalanceChangeReason,
    pub hours_before: Decimal,
    pub hours_after: Decimal,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carryover {
    pub carryover_hours: Decimal,
    pub next_year_total: Decimal,
}

pub fn carryover(balance: &SickLeaveBalance) -> Carryover {
    let carryover_hours = balance.remaining_hours().min(MAX_CARRYOVER_HOURS);
    Carryover {
        carryover_hours,
        next_year_total: (carryover_hours + FRONTLOAD_HOURS).min(MAX_BALANCE_HOURS),
    }
}

/// Opening balance for the following year plus its two history rows.
pub fn roll_forward(
    balance: &SickLeaveBalance,
    at: DateTime<Utc>,
) -> (SickLeaveBalance, Vec<BalanceHistoryRow>) {
    let result = carryover(balance);
    let year = balance.year + 1;
    let row = |reason, hours_before, hours_after| BalanceHistoryRow {
        employee_id: balance.employee_id.clone(),
        year,
        reason,
        hours_before,
        hours_after,
        recorded_at: at,
    };
    let history = vec![
        row(
            BalanceChangeReason::Carryover,
            Decimal::ZERO,
            result.carryover_hours,
        ),
        row(
            BalanceChangeReason::Frontload,
            result.carryover_hours,
            result.next_year_total,
        ),
    ];
    let next = SickLeaveBalance {
        employee_id: balance.employee_id.clone(),
        organization_id: balance.organization_id.clone(),
        year,
        total_hours: result.next_year_total,
        used_hours: Decimal::ZERO,
        carryover_from_previous_year: result.carryover_hours,
        max_balance_cap: MAX_BALANCE_HOURS,
    };
    (next, history)
}
