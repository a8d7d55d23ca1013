use crate::{
    components::{
        common::{Button, ButtonVariant, TextField},
        error::InlineErrorMessage,
        modal::Modal,
    },
    pages::employees::{utils::EmployeeFormMode, view_model::EmployeesViewModel},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeeFormModal(vm: EmployeesViewModel, mode: EmployeeFormMode) -> impl IntoView {
    let form = vm.form;
    let (name, set_name) = create_slice(form, |f| f.name.clone(), |f, v| f.name = v);
    let (email, set_email) = create_slice(form, |f| f.email.clone(), |f, v| f.email = v);
    let (address, set_address) = create_slice(form, |f| f.address.clone(), |f, v| f.address = v);
    let pending = vm.save_action.pending();
    let editing = matches!(mode, EmployeeFormMode::Edit(_));
    let title = if editing { "Edit employee" } else { "Add employee" };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !pending.get_untracked() {
            vm.submit_form();
        }
    };

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close_form())>
            <form class="space-y-4" on:submit=on_submit>
                <TextField label="Name" value=name on_input=move |v| set_name.set(v) required=true/>
                <TextField
                    label="Email"
                    value=email
                    on_input=move |v| set_email.set(v)
                    input_type="email"
                    required=true
                />
                <Show when=move || editing>
                    <TextField label="Address" value=address on_input=move |v| set_address.set(v)/>
                    <label class="flex items-center gap-2 text-sm text-fg">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.status)
                            on:change=move |ev| form.update(|f| f.status = event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                </Show>
                <Show when=move || !editing>
                    <p class="text-xs text-fg-muted">"New employees sign in with the default password."</p>
                </Show>
                <InlineErrorMessage error=vm.form_error/>
                <div class="flex justify-end gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=move |_| vm.close_form()
                        attr:type="button"
                    >
                        "Cancel"
                    </Button>
                    <Button loading=pending attr:type="submit">
                        {if editing { "Save changes" } else { "Add employee" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
