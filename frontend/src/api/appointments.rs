use super::{
    client::ApiClient,
    types::{
        ApiError, Appointment, AppointmentPayload, ApprovalPayload, ListEnvelope, MessageResponse,
    },
};

impl ApiClient {
    pub async fn get_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_json::<ListEnvelope<Appointment>>("/appointments", "Failed to load appointments")
            .await
            .map(ListEnvelope::into_items)
    }

    /// Appointments booked online that staff have not confirmed yet.
    pub async fn get_unconfirmed_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_json::<ListEnvelope<Appointment>>(
            "/appointments?for_notification=true",
            "Failed to load online appointments",
        )
        .await
        .map(ListEnvelope::into_items)
    }

    pub async fn create_appointment(
        &self,
        payload: &AppointmentPayload,
    ) -> Result<MessageResponse, ApiError> {
        self.post_for_message("/appointments", payload, "Failed to create appointment")
            .await
    }

    pub async fn update_appointment(
        &self,
        id: &str,
        payload: &AppointmentPayload,
    ) -> Result<MessageResponse, ApiError> {
        self.put_for_message(
            &format!("/appointments/{}", id),
            payload,
            "Failed to update appointment",
        )
        .await
    }

    pub async fn approve_appointment(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.put_for_message(
            &format!("/appointments/{}", id),
            &ApprovalPayload::approve(),
            "Failed to approve appointment",
        )
        .await
    }
}
