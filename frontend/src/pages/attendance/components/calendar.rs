use crate::{
    api::AttendanceRecord,
    components::{common::Button, error::InlineErrorMessage, layout::LoadingSpinner},
    pages::attendance::{
        utils::{calendar_cells, CalendarDay, DayStatus},
        view_model::AttendanceViewModel,
    },
    utils::time::format_date,
};
use chrono::Datelike;
use leptos::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Employee picker plus the monthly calendar of the selected employee.
#[component]
pub fn AttendanceCalendar(vm: AttendanceViewModel) -> impl IntoView {
    let loading = vm.records.loading();
    let error = Signal::derive(move || vm.records.get().and_then(Result::err));
    let records = Signal::derive(move || vm.records.get().and_then(Result::ok).unwrap_or_default());

    view! {
        <section class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Attendance history"</h2>
            <div class="flex flex-wrap gap-2">
                {move || {
                    let selected = vm.selected_id();
                    vm.roster_list()
                        .into_iter()
                        .map(|employee| {
                            let active = selected.as_deref() == Some(employee.id.as_str());
                            let id = employee.id.clone();
                            view! {
                                <button
                                    type="button"
                                    class=if active {
                                        "rounded-full px-3 py-1 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                    } else {
                                        "rounded-full px-3 py-1 text-sm bg-surface-muted text-fg"
                                    }
                                    on:click=move |_| vm.select_employee(&id)
                                >
                                    {employee.name}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <Show when=move || vm.selected_id().is_some()>
                <div class="flex items-center justify-between">
                    <button
                        type="button"
                        class="text-sm text-link hover:underline"
                        on:click=move |_| vm.month.update(|m| *m = m.previous())
                    >
                        "‹ Previous"
                    </button>
                    <span class="font-medium text-fg">{move || vm.month.get().label()}</span>
                    <button
                        type="button"
                        class="text-sm text-link hover:underline"
                        on:click=move |_| vm.month.update(|m| *m = m.next())
                    >
                        "Next ›"
                    </button>
                </div>
                <InlineErrorMessage error=error/>
                <Show when=move || loading.get()>
                    <LoadingSpinner/>
                </Show>
                <div class="grid grid-cols-7 gap-1 text-center text-xs">
                    {WEEKDAYS.iter().map(|day| view! { <div class="font-semibold text-fg-muted">{*day}</div> }).collect_view()}
                    {move || {
                        records.with(|records| calendar_cells(vm.month.get(), records))
                            .into_iter()
                            .map(|cell| match cell {
                                Some(day) => view! { <DayCell day=day vm=vm/> }.into_view(),
                                None => view! { <div></div> }.into_view(),
                            })
                            .collect_view()
                    }}
                </div>
                {move || vm.editing.get().map(|record| view! { <DayEditor record=record vm=vm/> })}
            </Show>
        </section>
    }
}

#[component]
fn DayCell(day: CalendarDay, vm: AttendanceViewModel) -> impl IntoView {
    let status = day.status();
    let record = day.record.clone();
    view! {
        <button
            type="button"
            class=format!("rounded-md p-2 {}", status.class())
            title=status.label()
            on:click=move |_| vm.open_day(record.clone())
        >
            <div class="font-semibold">{day.date.day()}</div>
            <div>{status.label()}</div>
        </button>
    }
}

#[component]
fn DayEditor(record: AttendanceRecord, vm: AttendanceViewModel) -> impl IntoView {
    let pending = vm.update_action.pending();
    let status = if record.leave { DayStatus::Leave } else { DayStatus::Present };
    let target = if record.leave { "Mark present" } else { "Mark on leave" };
    let id = record.id.clone();
    let leave = record.leave;

    view! {
        <div class="flex items-center justify-between rounded-md border border-border p-3 text-sm">
            <span>{format!("{}: {}", format_date(record.date), status.label())}</span>
            <div class="flex gap-2">
                <Button
                    loading=pending
                    on_click=move |_| vm.update_action.dispatch((id.clone(), !leave))
                >
                    {target}
                </Button>
                <button
                    type="button"
                    class="text-sm text-fg-muted hover:underline"
                    on:click=move |_| vm.editing.set(None)
                >
                    "Close"
                </button>
            </div>
        </div>
    }
}
