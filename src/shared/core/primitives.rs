use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Manager,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn can_review(self) -> bool {
        self >= Role::Manager
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn counts_toward_pay(self) -> bool {
        matches!(self, ApprovalStatus::Pending | ApprovalStatus::Approved)
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// Inclusive range of calendar dates in the employee's local timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        (from <= to).then_some(Self { from, to })
    }

    pub fn single(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// UTC instants covering the range with one day of padding on each side,
    /// so that overnight segments and relocated corrections are still found.
    pub fn padded_utc_bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let from = self.from.and_time(chrono::NaiveTime::MIN).and_utc() - Duration::days(1);
        let to = self.to.and_time(chrono::NaiveTime::MIN).and_utc() + Duration::days(2);
        (from, to)
    }
}

/// Half-up rounding to cents, applied once at the end of a pay computation.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Whole minutes between two instants, half-up on the seconds remainder.
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    (seconds + 30) / 60
}

pub fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_seconds().max(0)
}

pub fn local_date(at: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    at.with_timezone(&offset).date_naive()
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, m, s).unwrap()
    }

    #[rstest]
    #[case(at(9, 0, 0), at(9, 0, 29), 0)]
    #[case(at(9, 0, 0), at(9, 0, 30), 1)]
    #[case(at(9, 0, 0), at(12, 30, 0), 210)]
    #[case(at(9, 0, 0), at(8, 0, 0), 0)]
    fn it_should_round_minutes_half_up(
        #[case] start: DateTime<Utc>,
        #[case] end: DateTime<Utc>,
        #[case] expected: i64,
    ) {
        assert_eq!(minutes_between(start, end), expected);
    }

    #[rstest]
    #[case(dec!(10.005), dec!(10.01))]
    #[case(dec!(10.004), dec!(10.00))]
    #[case(dec!(-2.345), dec!(-2.35))]
    fn it_should_round_money_half_up(#[case] value: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_money(value), expected);
    }

    #[rstest]
    fn it_should_always_carry_two_decimal_places() {
        assert_eq!(round_money(dec!(160)).to_string(), "160.00");
    }

    #[rstest]
    fn it_should_reject_an_inverted_range() {
        let from = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert!(DateRange::new(from, to).is_none());
        assert!(DateRange::new(to, from).unwrap().contains(to));
    }

    #[rstest]
    fn it_should_resolve_the_local_date_across_midnight() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            local_date(at(2, 0, 0), offset),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
    }

    #[rstest]
    fn it_should_only_let_managers_and_above_review() {
        assert!(!Role::Employee.can_review());
        assert!(Role::Manager.can_review());
        assert!(Role::SuperAdmin.can_review());
    }
}
