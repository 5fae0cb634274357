use crate::modules::attendance::adapters::outbound::clock_token_store::ClockTokenStore;
use crate::modules::attendance::use_cases::clock_tokens::token::{ClockToken, ClockTokenAction};
use crate::modules::settings::adapters::outbound::settings_store::SettingsStore;
use crate::shared::application::authorization::authorize_reviewer;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::directory::EmployeeDirectory;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueClockToken {
    pub employee_id: String,
    pub action: ClockTokenAction,
    /// Set when a manager generates the code on the employee's behalf.
    pub requested_by: Option<String>,
    pub now: DateTime<Utc>,
}

pub struct ClockTokenService {
    directory: Arc<dyn EmployeeDirectory>,
    settings: Arc<dyn SettingsStore>,
    tokens: Arc<dyn ClockTokenStore>,
}

impl ClockTokenService {
    pub fn new(
        directory: Arc<dyn EmployeeDirectory>,
        settings: Arc<dyn SettingsStore>,
        tokens: Arc<dyn ClockTokenStore>,
    ) -> Self {
        Self {
            directory,
            settings,
            tokens,
        }
    }

    #[tracing::instrument(skip(self), fields(employee_id = %command.employee_id))]
    pub async fn issue(&self, command: IssueClockToken) -> Result<ClockToken, ApplicationError> {
        let employee = self
            .directory
            .get_employee(&command.employee_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("employee {}", command.employee_id)))?;

        if let Some(requester_id) = command
            .requested_by
            .as_deref()
            .filter(|id| *id != employee.id)
        {
            let requester = self
                .directory
                .get_employee(requester_id)
                .await?
                .ok_or_else(|| ApplicationError::NotFound(format!("employee {requester_id}")))?;
            authorize_reviewer(&requester, &employee)?;
        }

        let settings = self.settings.get_settings(&employee.organization_id).await?;
        let token = ClockToken::issue(&employee.id, command.action, &settings, command.now);
        self.tokens.remember(token.clone()).await;
        debug!(expires_at = %token.expires_at, "clock token issued");
        Ok(token)
    }

    pub async fn validate(
        &self,
        nonce: &str,
        employee_id: &str,
        action: ClockTokenAction,
        now: DateTime<Utc>,
    ) -> Result<ClockToken, ApplicationError> {
        self.tokens
            .consume(nonce, employee_id, action, now)
            .await
            .map_err(|rejection| {
                warn!(employee_id, %rejection, "clock token rejected");
                ApplicationError::Token(rejection)
            })
    }

    pub async fn release(&self, nonce: &str) {
        if self.tokens.release(nonce).await {
            debug!("clock token released, the clock action was not recorded");
        }
    }
}
