use crate::shared::application::errors::ApplicationError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const GRACE_MINUTES_RANGE: RangeInclusive<i64> = 0..=60;
pub const QR_EXPIRATION_SECONDS_RANGE: RangeInclusive<i64> = 15..=300;
pub const MEAL_BREAK_THRESHOLD_MINUTES_RANGE: RangeInclusive<i64> = 60..=720;

/// Per-organization attendance policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSettings {
    pub require_schedule_for_clock_in: bool,
    pub early_clock_in_grace_minutes: i64,
    pub late_clock_in_grace_minutes: i64,
    pub qr_expiration_seconds: i64,
    pub allow_manager_assisted: bool,
    pub meal_break_threshold_minutes: i64,
    pub require_token_for_clock_out: bool,
}

impl Default for AttendanceSettings {
    fn default() -> Self {
        Self {
            require_schedule_for_clock_in: false,
            early_clock_in_grace_minutes: 15,
            late_clock_in_grace_minutes: 15,
            qr_expiration_seconds: 45,
            allow_manager_assisted: true,
            meal_break_threshold_minutes: 300,
            require_token_for_clock_out: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttendanceSettingsPatch {
    pub require_schedule_for_clock_in: Option<bool>,
    pub early_clock_in_grace_minutes: Option<i64>,
    pub late_clock_in_grace_minutes: Option<i64>,
    pub qr_expiration_seconds: Option<i64>,
    pub allow_manager_assisted: Option<bool>,
    pub meal_break_threshold_minutes: Option<i64>,
    pub require_token_for_clock_out: Option<bool>,
}

impl AttendanceSettings {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let mut violations = Vec::new();
        if !GRACE_MINUTES_RANGE.contains(&self.early_clock_in_grace_minutes) {
            violations.push(format!(
                "early_clock_in_grace_minutes must be between 0 and 60, got {}",
                self.early_clock_in_grace_minutes
            ));
        }
        if !GRACE_MINUTES_RANGE.contains(&self.late_clock_in_grace_minutes) {
            violations.push(format!(
                "late_clock_in_grace_minutes must be between 0 and 60, got {}",
                self.late_clock_in_grace_minutes
            ));
        }
        if !QR_EXPIRATION_SECONDS_RANGE.contains(&self.qr_expiration_seconds) {
            violations.push(format!(
                "qr_expiration_seconds must be between 15 and 300, got {}",
                self.qr_expiration_seconds
            ));
        }
        if !MEAL_BREAK_THRESHOLD_MINUTES_RANGE.contains(&self.meal_break_threshold_minutes) {
            violations.push(format!(
                "meal_break_threshold_minutes must be between 60 and 720, got {}",
                self.meal_break_threshold_minutes
            ));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::Validation(violations.join("; ")))
        }
    }

    /// Returns the patched settings, leaving `self` untouched when invalid.
    pub fn apply(&self, patch: &AttendanceSettingsPatch) -> Result<Self, ApplicationError> {
        let next = Self {
            require_schedule_for_clock_in: patch
                .require_schedule_for_clock_in
                .unwrap_or(self.require_schedule_for_clock_in),
            early_clock_in_grace_minutes: patch
                .early_clock_in_grace_minutes
                .unwrap_or(self.early_clock_in_grace_minutes),
            late_clock_in_grace_minutes: patch
                .late_clock_in_grace_minutes
                .unwrap_or(self.late_clock_in_grace_minutes),
            qr_expiration_seconds: patch
                .qr_expiration_seconds
                .unwrap_or(self.qr_expiration_seconds),
            allow_manager_assisted: patch
                .allow_manager_assisted
                .unwrap_or(self.allow_manager_assisted),
            meal_break_threshold_minutes: patch
                .meal_break_threshold_minutes
                .unwrap_or(self.meal_break_threshold_minutes),
            require_token_for_clock_out: patch
                .require_token_for_clock_out
                .unwrap_or(self.require_token_for_clock_out),
        };
        next.validate()?;
        Ok(next)
    }
}
