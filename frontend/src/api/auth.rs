use serde_json::json;

use super::{
    client::ApiClient,
    types::{
        ApiError, CreateEmployee, Employee, EmployeeStatusUpdate, ListEnvelope, LoginRequest,
        LoginResponse, MessageResponse, Role, UpdateEmployee,
    },
};
use crate::state::session::Session;

impl ApiClient {
    /// Signs in and persists the returned token and role.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, ApiError> {
        let response: LoginResponse = self
            .post_json("/auth/login", &request, "Login failed")
            .await?;
        let role = Role::parse(&response.role).ok_or_else(|| {
            ApiError::unauthorized(format!("Role '{}' cannot use this dashboard", response.role))
        })?;
        let session = Session {
            token: response.token,
            role,
        };
        self.session()
            .persist(&session)
            .map_err(|e| ApiError::unknown(e.to_string()))?;
        Ok(session)
    }

    /// The local session is cleared even when the server call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self
            .post_for_message("/auth/logout", &json!({}), "Logout failed")
            .await;
        self.session().clear();
        result.map(|_| ())
    }

    pub async fn get_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json::<ListEnvelope<Employee>>("/auth/employees", "Failed to load employees")
            .await
            .map(ListEnvelope::into_items)
    }

    pub async fn register_employee(
        &self,
        payload: &CreateEmployee,
    ) -> Result<MessageResponse, ApiError> {
        self.post_for_message("/auth/register", payload, "Failed to add employee")
            .await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        payload: &UpdateEmployee,
    ) -> Result<MessageResponse, ApiError> {
        self.put_for_message(&format!("/auth/{}", id), payload, "Failed to update employee")
            .await
    }

    pub async fn set_employee_status(
        &self,
        id: &str,
        status: bool,
    ) -> Result<MessageResponse, ApiError> {
        self.put_for_message(
            &format!("/auth/{}", id),
            &EmployeeStatusUpdate { status },
            "Failed to update status",
        )
        .await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.delete_for_message(&format!("/auth/{}", id), "Failed to delete employee")
            .await
    }
}
