use crate::shared::application::errors::{ApplicationError, ErrorKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkFailure {
    pub id: String,
    pub kind: ErrorKind,
    pub reason: String,
}

/// Per-item result of a bulk operation. Items are independent, a failure
/// never rolls back the successes recorded before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkOutcome {
    pub successes: Vec<String>,
    pub failures: Vec<BulkFailure>,
}

impl BulkOutcome {
    pub fn record<T>(&mut self, id: &str, result: Result<T, ApplicationError>) {
        match result {
            Ok(_) => self.successes.push(id.to_string()),
            Err(error) => self.failures.push(BulkFailure {
                id: id.to_string(),
                kind: error.kind(),
                reason: error.to_string(),
            }),
        }
    }
}
