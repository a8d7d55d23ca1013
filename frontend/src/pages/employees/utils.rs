use thiserror::Error;

use crate::api::{ApiError, CreateEmployee, Employee, UpdateEmployee};

/// Password assigned to newly registered staff.
pub const DEFAULT_PASSWORD: &str = "123456";
pub const DEFAULT_ROLE: &str = "employee";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeValidationError {
    #[error("Employee name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Enter a valid email address")]
    InvalidEmail,
}

impl From<EmployeeValidationError> for ApiError {
    fn from(error: EmployeeValidationError) -> Self {
        ApiError::validation(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeFormMode {
    Create,
    Edit(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub name: String,
    pub email: String,
    pub address: String,
    pub status: bool,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            address: String::new(),
            status: true,
        }
    }
}

impl EmployeeFormState {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            address: employee.address.clone().unwrap_or_default(),
            status: employee.status,
        }
    }

    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.name.trim().is_empty() {
            return Err(EmployeeValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(EmployeeValidationError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(EmployeeValidationError::InvalidEmail);
        }
        Ok(())
    }

    pub fn to_create(&self) -> Result<CreateEmployee, EmployeeValidationError> {
        self.validate()?;
        Ok(CreateEmployee {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            role: DEFAULT_ROLE.to_string(),
        })
    }

    /// Only name, email, address and status are ever sent on update.
    pub fn to_update(&self) -> Result<UpdateEmployee, EmployeeValidationError> {
        self.validate()?;
        let address = self.address.trim();
        Ok(UpdateEmployee {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            address: (!address.is_empty()).then(|| address.to_string()),
            status: self.status,
        })
    }
}

pub fn remove_employee(list: &mut Vec<Employee>, id: &str) {
    list.retain(|employee| employee.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::employee;
    use serde_json::json;

    #[test]
    fn create_uses_default_password_and_role() {
        let form = EmployeeFormState {
            name: " Asha ".into(),
            email: "asha@salon.test".into(),
            ..EmployeeFormState::default()
        };
        let payload = form.to_create().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Asha",
                "email": "asha@salon.test",
                "password": "123456",
                "role": "employee"
            })
        );
    }

    #[test]
    fn update_carries_only_editable_fields() {
        let mut form = EmployeeFormState::from_employee(&employee("e1", "Asha"));
        form.address = "MG Road".into();
        form.status = false;
        let value = serde_json::to_value(form.to_update().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({ "name": "Asha", "email": "asha@salon.test", "address": "MG Road", "status": false })
        );
    }

    #[test]
    fn validation_rejects_missing_fields() {
        let mut form = EmployeeFormState::default();
        assert_eq!(form.validate(), Err(EmployeeValidationError::MissingName));
        form.name = "Asha".into();
        assert_eq!(form.validate(), Err(EmployeeValidationError::MissingEmail));
        form.email = "asha".into();
        assert_eq!(form.validate(), Err(EmployeeValidationError::InvalidEmail));
        form.email = "asha@salon.test".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn remove_employee_drops_only_matching_row() {
        let mut list = vec![employee("e1", "Asha"), employee("e2", "Ravi")];
        remove_employee(&mut list, "e1");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "e2");
        remove_employee(&mut list, "missing");
        assert_eq!(list.len(), 1);
    }
}
