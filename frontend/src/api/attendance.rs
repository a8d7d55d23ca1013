use super::{
    client::ApiClient,
    types::{
        ApiError, AttendanceMark, AttendanceRecord, AttendanceUpdate, ListEnvelope,
        MessageResponse,
    },
};

impl ApiClient {
    pub async fn mark_attendance(&self, mark: &AttendanceMark) -> Result<MessageResponse, ApiError> {
        self.post_for_message("/attendance", mark, "Failed to mark attendance")
            .await
    }

    pub async fn update_attendance(
        &self,
        id: &str,
        leave: bool,
    ) -> Result<MessageResponse, ApiError> {
        self.put_for_message(
            &format!("/attendance/{}", id),
            &AttendanceUpdate { leave },
            "Failed to update attendance",
        )
        .await
    }

    pub async fn get_employee_attendance(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json::<ListEnvelope<AttendanceRecord>>(
            &format!("/attendance/employee/{}", employee_id),
            "Failed to load attendance",
        )
        .await
        .map(ListEnvelope::into_items)
    }
}
