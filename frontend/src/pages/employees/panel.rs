use crate::{
    components::{common::Button, confirm_dialog::ConfirmDialog},
    pages::employees::{
        components::{form_modal::EmployeeFormModal, list::EmployeeList},
        view_model::use_employees_view_model,
    },
};
use leptos::*;

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let deleting = vm.delete_action.pending();
    let delete_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|employee| format!("Remove {} from the roster? This cannot be undone.", employee.name))
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-fg">"Employees"</h1>
                <Button on_click=move |_| vm.open_create()>"Add employee"</Button>
            </div>
            <EmployeeList vm=vm/>
            {move || vm.form_mode.get().map(|mode| view! { <EmployeeFormModal vm=vm mode=mode/> })}
            <ConfirmDialog
                is_open=delete_open
                title="Delete employee"
                message=delete_message
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
                confirm_label="Delete"
                confirm_disabled=deleting
                destructive=true
            />
        </div>
    }
}
