use std::rc::Rc;

use crate::api::{ApiClient, ApiError, CreateEmployee, Employee, MessageResponse, UpdateEmployee};

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.get_employees().await
    }

    pub async fn create(&self, payload: CreateEmployee) -> Result<MessageResponse, ApiError> {
        self.client.register_employee(&payload).await
    }

    pub async fn update(
        &self,
        id: String,
        payload: UpdateEmployee,
    ) -> Result<MessageResponse, ApiError> {
        self.client.update_employee(&id, &payload).await
    }

    /// Flips the stored status; the caller refetches afterwards.
    pub async fn toggle_status(&self, employee: &Employee) -> Result<MessageResponse, ApiError> {
        self.client
            .set_employee_status(&employee.id, !employee.status)
            .await
    }

    pub async fn delete(&self, id: String) -> Result<MessageResponse, ApiError> {
        self.client.delete_employee(&id).await
    }
}
