use crate::modules::attendance::adapters::outbound::clock_token_cache::MokaClockTokenStore;
use crate::modules::attendance::adapters::outbound::ledger_in_memory::InMemoryLedger;
use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::use_cases::check_clock_in_allowed::handler::ClockInGate;
use crate::modules::attendance::use_cases::clock_tokens::service::ClockTokenService;
use crate::modules::attendance::use_cases::get_attendance_session::handler::GetAttendanceSessionHandler;
use crate::modules::attendance::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::modules::attendance::use_cases::project_ledger::handler::Projector;
use crate::modules::attendance::use_cases::record_clock_action::handler::RecordClockActionHandler;
use crate::modules::attendance::use_cases::review_time_entries::handler::ReviewTimeEntriesHandler;
use crate::modules::corrections::adapters::outbound::repository_in_memory::InMemoryCorrectionRepository;
use crate::modules::corrections::use_cases::review_correction::handler::ReviewCorrectionHandler;
use crate::modules::corrections::use_cases::submit_correction::handler::SubmitCorrectionHandler;
use crate::modules::payroll::adapters::outbound::sick_leave_in_memory::InMemorySickLeaveRepository;
use crate::modules::payroll::use_cases::compute_pay::handler::ComputePayHandler;
use crate::modules::payroll::use_cases::export_payroll::handler::ExportPayrollHandler;
use crate::modules::payroll::use_cases::year_end_carryover::handler::YearEndCarryoverHandler;
use crate::modules::settings::adapters::outbound::settings_store::InMemorySettingsStore;
use crate::modules::settings::use_cases::update_attendance_settings::handler::UpdateAttendanceSettingsHandler;
use crate::shared::infrastructure::directory::in_memory::InMemoryDirectory;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::notification_sink::in_memory::InMemoryNotificationSink;
use std::sync::Arc;

pub const LEDGER_PROJECTION: &str = "attendance_ledger";

pub type ClockActions = RecordClockActionHandler<InMemoryEventStore<AttendanceEvent>, InMemoryLedger>;
pub type Sessions = GetAttendanceSessionHandler<InMemoryEventStore<AttendanceEvent>>;

#[derive(Clone)]
pub struct AppState {
    pub clock_tokens: Arc<ClockTokenService>,
    pub clock_actions: Arc<ClockActions>,
    pub sessions: Arc<Sessions>,
    pub time_entries: Arc<dyn TimeEntryQueries + Send + Sync>,
    pub time_entry_reviews: Arc<ReviewTimeEntriesHandler>,
    pub corrections: Arc<SubmitCorrectionHandler>,
    pub correction_reviews: Arc<ReviewCorrectionHandler>,
    pub payroll: Arc<ComputePayHandler>,
    pub payroll_export: Arc<ExportPayrollHandler>,
    pub carryover: Arc<YearEndCarryoverHandler>,
    pub settings: Arc<UpdateAttendanceSettingsHandler>,
}

/// Concrete adapters behind the ports. In-memory for now.
pub struct InMemoryBackends {
    pub event_store: Arc<InMemoryEventStore<AttendanceEvent>>,
    pub ledger: Arc<InMemoryLedger>,
    pub directory: Arc<InMemoryDirectory>,
    pub settings: Arc<InMemorySettingsStore>,
    pub corrections: Arc<InMemoryCorrectionRepository>,
    pub sick_leave: Arc<InMemorySickLeaveRepository>,
    pub notifications: Arc<InMemoryNotificationSink>,
    pub tokens: Arc<MokaClockTokenStore>,
}

impl InMemoryBackends {
    pub fn new(token_cache_capacity: u64) -> Self {
        Self {
            event_store: Arc::new(InMemoryEventStore::new()),
            ledger: Arc::new(InMemoryLedger::new()),
            directory: Arc::new(InMemoryDirectory::new()),
            settings: Arc::new(InMemorySettingsStore::new()),
            corrections: Arc::new(InMemoryCorrectionRepository::new()),
            sick_leave: Arc::new(InMemorySickLeaveRepository::new()),
            notifications: Arc::new(InMemoryNotificationSink::new()),
            tokens: Arc::new(MokaClockTokenStore::new(token_cache_capacity)),
        }
    }
}

impl AppState {
    pub fn from_backends(backends: &InMemoryBackends) -> Self {
        let clock_tokens = Arc::new(ClockTokenService::new(
            backends.directory.clone(),
            backends.settings.clone(),
            backends.tokens.clone(),
        ));
        let projector = Projector::new(
            LEDGER_PROJECTION,
            backends.ledger.clone(),
            backends.ledger.clone(),
        );
        let clock_actions = Arc::new(RecordClockActionHandler::new(
            backends.event_store.clone(),
            projector,
            backends.directory.clone(),
            backends.settings.clone(),
            ClockInGate::new(backends.directory.clone()),
            clock_tokens.clone(),
            backends.notifications.clone(),
        ));
        let sessions = Arc::new(GetAttendanceSessionHandler::new(
            backends.event_store.clone(),
            backends.directory.clone(),
            backends.settings.clone(),
        ));

        AppState {
            clock_tokens,
            clock_actions,
            sessions,
            time_entries: backends.ledger.clone(),
            time_entry_reviews: Arc::new(ReviewTimeEntriesHandler::new(
                backends.ledger.clone(),
                backends.directory.clone(),
            )),
            corrections: Arc::new(SubmitCorrectionHandler::new(
                backends.ledger.clone(),
                backends.corrections.clone(),
            )),
            correction_reviews: Arc::new(ReviewCorrectionHandler::new(
                backends.corrections.clone(),
                backends.ledger.clone(),
                backends.directory.clone(),
                backends.notifications.clone(),
            )),
            payroll: Arc::new(ComputePayHandler::new(
                backends.ledger.clone(),
                backends.directory.clone(),
            )),
            payroll_export: Arc::new(ExportPayrollHandler::new(
                backends.ledger.clone(),
                backends.directory.clone(),
            )),
            carryover: Arc::new(YearEndCarryoverHandler::new(backends.sick_leave.clone())),
            settings: Arc::new(UpdateAttendanceSettingsHandler::new(
                backends.settings.clone(),
            )),
        }
    }
}
