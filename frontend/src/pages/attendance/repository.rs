use std::rc::Rc;

use super::utils::MarkOutcome;
use crate::api::{ApiClient, ApiError, AttendanceMark, AttendanceRecord, Employee, MessageResponse};

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_roster(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.get_employees().await
    }

    /// Posts each mark in order. A failure never stops the remaining
    /// employees from being attempted, and nothing is rolled back.
    pub async fn mark_all(&self, marks: Vec<(String, AttendanceMark)>) -> MarkOutcome {
        let mut outcome = MarkOutcome {
            attempted: marks.len(),
            failed: Vec::new(),
        };
        for (name, mark) in marks {
            if let Err(err) = self.client.mark_attendance(&mark).await {
                log::warn!("attendance for {} failed: {}", name, err);
                outcome.failed.push(name);
            }
        }
        outcome
    }

    pub async fn fetch_records(&self, employee_id: String) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.get_employee_attendance(&employee_id).await
    }

    pub async fn set_leave(&self, record_id: String, leave: bool) -> Result<MessageResponse, ApiError> {
        self.client.update_attendance(&record_id, leave).await
    }
}
