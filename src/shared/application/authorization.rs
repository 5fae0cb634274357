use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::directory::Employee;

/// A reviewer must be someone else, hold a manager role or above and belong
/// to the subject's organization. Self-review is checked first.
pub fn authorize_reviewer(reviewer: &Employee, subject: &Employee) -> Result<(), ApplicationError> {
    if reviewer.id == subject.id {
        return Err(ApplicationError::Forbidden(
            "you cannot review your own time records".into(),
        ));
    }
    if reviewer.organization_id != subject.organization_id {
        return Err(ApplicationError::Forbidden(format!(
            "{} does not belong to your organization",
            subject.id
        )));
    }
    if !reviewer.role.can_review() {
        return Err(ApplicationError::Forbidden(
            "a manager role is required to review time records".into(),
        ));
    }
    Ok(())
}
