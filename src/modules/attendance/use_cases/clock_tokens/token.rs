use crate::modules::settings::core::attendance_settings::AttendanceSettings;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockTokenAction {
    ClockIn,
    ClockOut,
}

/// Short-lived, single-use proof of presence shown as a QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockToken {
    pub employee_id: String,
    pub action: ClockTokenAction,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub nonce: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenRejection {
    #[error("clock token expired, scan a fresh code")]
    Expired,
    #[error("clock token was already used")]
    AlreadyConsumed,
    #[error("clock token is not recognized")]
    Unknown,
    #[error("clock token was issued for a different action")]
    ActionMismatch,
}

impl ClockToken {
    pub fn issue(
        employee_id: impl Into<String>,
        action: ClockTokenAction,
        settings: &AttendanceSettings,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            action,
            issued_at: now,
            expires_at: now + Duration::seconds(settings.qr_expiration_seconds),
            nonce: Uuid::new_v4().simple().to_string(),
        }
    }

    /// Valid up to and including `expires_at`.
    pub fn check_window(&self, now: DateTime<Utc>) -> Result<(), TokenRejection> {
        if now > self.expires_at {
            return Err(TokenRejection::Expired);
        }
        Ok(())
    }
}
