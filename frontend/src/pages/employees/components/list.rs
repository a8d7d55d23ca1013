use crate::{
    api::Employee,
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    pages::employees::view_model::EmployeesViewModel,
};
use leptos::*;

pub fn status_label(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}

#[component]
pub fn EmployeeList(vm: EmployeesViewModel) -> impl IntoView {
    let loading = vm.resource.loading();
    let error = Signal::derive(move || vm.resource.get().and_then(Result::err));

    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6">
            <InlineErrorMessage error=error/>
            <Show when=move || loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show
                when=move || !vm.employees.with(Vec::is_empty)
                fallback=move || {
                    view! {
                        <Show when=move || !loading.get()>
                            <EmptyState title="No employees yet"/>
                        </Show>
                    }
                }
            >
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-3 py-2 text-left">"Name"</th>
                            <th class="px-3 py-2 text-left">"Email"</th>
                            <th class="px-3 py-2 text-left">"Address"</th>
                            <th class="px-3 py-2 text-left">"Status"</th>
                            <th class="px-3 py-2"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || {
                            vm.employees
                                .get()
                                .into_iter()
                                .map(|employee| view! { <EmployeeRow employee=employee vm=vm/> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn EmployeeRow(employee: Employee, vm: EmployeesViewModel) -> impl IntoView {
    let toggle_target = employee.clone();
    let edit_target = employee.clone();
    let delete_target = employee.clone();
    let toggling = vm.toggle_action.pending();
    let active = employee.status;

    view! {
        <tr>
            <td class="px-3 py-2 font-medium">{employee.name.clone()}</td>
            <td class="px-3 py-2">{employee.email.clone()}</td>
            <td class="px-3 py-2">{employee.address.clone().unwrap_or_else(|| "-".to_string())}</td>
            <td class="px-3 py-2">
                <button
                    type="button"
                    class=if active {
                        "rounded-full px-2 py-0.5 text-xs font-semibold bg-status-success-bg text-status-success-text"
                    } else {
                        "rounded-full px-2 py-0.5 text-xs font-semibold bg-surface-muted text-fg-muted"
                    }
                    title="Toggle status"
                    disabled=move || toggling.get()
                    on:click=move |_| vm.toggle_action.dispatch(toggle_target.clone())
                >
                    {status_label(active)}
                </button>
            </td>
            <td class="px-3 py-2 whitespace-nowrap text-right space-x-2">
                <button
                    type="button"
                    class="text-link hover:underline"
                    on:click=move |_| vm.open_edit(&edit_target)
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="text-action-danger-bg hover:underline"
                    on:click=move |_| vm.pending_delete.set(Some(delete_target.clone()))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_label_reflects_flag() {
        assert_eq!(status_label(true), "Active");
        assert_eq!(status_label(false), "Inactive");
    }
}
