use super::{
    repository::EmployeesRepository,
    utils::{remove_employee, EmployeeFormMode, EmployeeFormState},
};
use crate::{
    api::{ApiClient, ApiError, Employee, MessageResponse},
    state::notifications::{use_notifications, NotificationCenter},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees: RwSignal<Vec<Employee>>,
    pub reload: RwSignal<u32>,
    pub resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub form_mode: RwSignal<Option<EmployeeFormMode>>,
    pub form: RwSignal<EmployeeFormState>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub save_action: Action<(EmployeeFormMode, EmployeeFormState), Result<MessageResponse, ApiError>>,
    pub delete_action: Action<Employee, Result<(), ApiError>>,
    pub toggle_action: Action<Employee, Result<(), ApiError>>,
}

impl EmployeesViewModel {
    pub fn open_create(&self) {
        self.form.set(EmployeeFormState::default());
        self.form_error.set(None);
        self.form_mode.set(Some(EmployeeFormMode::Create));
    }

    pub fn open_edit(&self, employee: &Employee) {
        self.form.set(EmployeeFormState::from_employee(employee));
        self.form_error.set(None);
        self.form_mode.set(Some(EmployeeFormMode::Edit(employee.id.clone())));
    }

    pub fn close_form(&self) {
        self.form_mode.set(None);
    }

    pub fn submit_form(&self) {
        if let Some(mode) = self.form_mode.get_untracked() {
            self.save_action.dispatch((mode, self.form.get_untracked()));
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(employee) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(employee);
        }
    }
}

pub async fn save_employee(
    repo: &EmployeesRepository,
    mode: EmployeeFormMode,
    form: &EmployeeFormState,
) -> Result<MessageResponse, ApiError> {
    match mode {
        EmployeeFormMode::Create => repo.create(form.to_create()?).await,
        EmployeeFormMode::Edit(id) => repo.update(id, form.to_update()?).await,
    }
}

/// Removes the row locally only after the server confirms the delete.
pub async fn delete_employee(
    repo: &EmployeesRepository,
    employee: &Employee,
    employees: RwSignal<Vec<Employee>>,
    notifications: NotificationCenter,
) -> Result<(), ApiError> {
    match repo.delete(employee.id.clone()).await {
        Ok(_) => {
            employees.update(|list| remove_employee(list, &employee.id));
            notifications.success(format!("{} removed", employee.name));
            Ok(())
        }
        Err(err) => {
            notifications.error(err.error.clone());
            Err(err)
        }
    }
}

pub async fn toggle_employee_status(
    repo: &EmployeesRepository,
    employee: &Employee,
    reload: RwSignal<u32>,
    notifications: NotificationCenter,
) -> Result<(), ApiError> {
    match repo.toggle_status(employee).await {
        Ok(_) => {
            reload.update(|n| *n += 1);
            Ok(())
        }
        Err(err) => {
            notifications.error(err.error.clone());
            Err(err)
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));
    let notifications = use_notifications();

    let employees = create_rw_signal(Vec::<Employee>::new());
    let reload = create_rw_signal(0u32);
    let form_mode = create_rw_signal(None::<EmployeeFormMode>);
    let form = create_rw_signal(EmployeeFormState::default());
    let form_error = create_rw_signal(None::<ApiError>);
    let pending_delete = create_rw_signal(None::<Employee>);

    let repo_for_resource = repository.clone();
    let resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_employees().await }
        },
    );

    let repo_for_save = repository.clone();
    let save_action = create_action(move |(mode, draft): &(EmployeeFormMode, EmployeeFormState)| {
        let repo = repo_for_save.clone();
        let mode = mode.clone();
        let draft = draft.clone();
        async move { save_employee(&repo, mode, &draft).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |employee: &Employee| {
        let repo = repo_for_delete.clone();
        let employee = employee.clone();
        async move { delete_employee(&repo, &employee, employees, notifications).await }
    });

    let repo_for_toggle = repository;
    let toggle_action = create_action(move |employee: &Employee| {
        let repo = repo_for_toggle.clone();
        let employee = employee.clone();
        async move { toggle_employee_status(&repo, &employee, reload, notifications).await }
    });

    create_effect(move |_| {
        if let Some(Ok(list)) = resource.get() {
            employees.set(list);
        }
    });

    create_effect(move |_| match save_action.value().get() {
        Some(Ok(response)) => {
            form_mode.set(None);
            form_error.set(None);
            notifications.success(
                response
                    .message
                    .unwrap_or_else(|| "Employee saved".to_string()),
            );
            reload.update(|n| *n += 1);
        }
        Some(Err(err)) => form_error.set(Some(err)),
        None => {}
    });

    create_effect(move |_| {
        if delete_action.value().get().is_some() {
            pending_delete.set(None);
        }
    });

    EmployeesViewModel {
        employees,
        reload,
        resource,
        form_mode,
        form,
        form_error,
        pending_delete,
        save_action,
        delete_action,
        toggle_action,
    }
}
