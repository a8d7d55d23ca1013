use std::rc::Rc;

use crate::api::{ApiClient, ApiError, AppointmentPayload, MessageResponse, Service};

#[derive(Clone)]
pub struct HomeRepository {
    client: Rc<ApiClient>,
}

impl HomeRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_services(&self) -> Result<Vec<Service>, ApiError> {
        self.client.get_services().await
    }

    pub async fn request_appointment(
        &self,
        payload: AppointmentPayload,
    ) -> Result<MessageResponse, ApiError> {
        self.client.create_appointment(&payload).await
    }
}
