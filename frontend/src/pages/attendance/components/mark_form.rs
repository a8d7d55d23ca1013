use crate::{
    components::{
        common::Button, empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner,
    },
    pages::attendance::{utils::toggle_present, view_model::AttendanceViewModel},
    utils::time::{format_date, today_in_app_tz},
};
use leptos::*;

/// Today's check-in sheet: every employee starts unchecked.
#[component]
pub fn MarkAttendanceForm(vm: AttendanceViewModel) -> impl IntoView {
    let loading = vm.roster.loading();
    let error = Signal::derive(move || vm.roster.get().and_then(Result::err));
    let pending = vm.mark_action.pending();
    let empty = move || vm.roster.with(|r| matches!(r, Some(Ok(list)) if list.is_empty()));

    view! {
        <section class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-fg">"Mark attendance"</h2>
                <span class="text-sm text-fg-muted">{format_date(today_in_app_tz())}</span>
            </div>
            <InlineErrorMessage error=error/>
            <Show when=move || loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=empty>
                <EmptyState title="No employees on the roster"/>
            </Show>
            <ul class="divide-y divide-border">
                {move || {
                    vm.roster_list()
                        .into_iter()
                        .map(|employee| {
                            let id = employee.id.clone();
                            let toggle_id = employee.id.clone();
                            view! {
                                <li class="py-2">
                                    <label class="flex items-center gap-3 text-sm text-fg">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || vm.present.with(|p| p.contains(&id))
                                            on:change=move |_| vm.present.update(|p| toggle_present(p, &toggle_id))
                                        />
                                        {employee.name}
                                    </label>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <div class="flex justify-end">
                <Button
                    loading=pending
                    disabled=MaybeSignal::derive(move || vm.roster_list().is_empty())
                    on_click=move |_| vm.mark_action.dispatch(())
                >
                    {move || if pending.get() { "Saving..." } else { "Submit attendance" }}
                </Button>
            </div>
        </section>
    }
}
