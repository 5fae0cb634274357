use crate::modules::attendance::core::intents::AttendanceIntent;
use crate::shared::infrastructure::notification_sink::{
    Notification, NotificationSink, deliver_all,
};

/// Translate intents into notifications and hand them to the sink.
pub async fn dispatch_intents(sink: &dyn NotificationSink, intents: Vec<AttendanceIntent>) {
    let notifications = intents
        .into_iter()
        .map(|intent| match intent {
            AttendanceIntent::NotifyLateClockIn {
                employee_id,
                late_by_minutes,
            } => Notification::new(
                employee_id,
                format!("You clocked in {late_by_minutes} minutes after your shift started"),
            ),
            AttendanceIntent::NotifyAssistedClockIn {
                employee_id,
                assisted_by,
            } => Notification::new(
                employee_id,
                format!("You were clocked in by manager {assisted_by}"),
            ),
            AttendanceIntent::NotifyMealBreakDue {
                employee_id,
                worked_minutes,
            } => Notification::new(
                employee_id,
                format!(
                    "You have worked {worked_minutes} minutes without a lunch break, please take one"
                ),
            ),
        })
        .collect();
    deliver_all(sink, notifications).await;
}
