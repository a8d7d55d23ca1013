use super::{edit_modal::EditBookingModal, explore_modal::ExploreModal};
use crate::{
    api::{Appointment, PaymentStatus},
    components::{
        common::INPUT_CLASS, empty_state::EmptyState, error::InlineErrorMessage,
        layout::LoadingSpinner,
    },
    pages::bookings::{
        filter::{filter_appointments, StatusFilter},
        repository::BookingsRepository,
    },
    utils::{money::format_rupees, time::format_date},
};
use leptos::*;

pub fn status_badge_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        PaymentStatus::Completed => "bg-status-success-bg text-status-success-text",
        PaymentStatus::Refunded => "bg-status-error-bg text-status-error-text",
    }
}

#[component]
pub fn BookingList(repository: BookingsRepository) -> impl IntoView {
    let reload = create_rw_signal(0u32);
    let list_repo = repository.clone();
    let list = create_resource(
        move || reload.get(),
        move |_| {
            let repo = list_repo.clone();
            async move { repo.fetch_list().await }
        },
    );

    let search = create_rw_signal(String::new());
    let status = create_rw_signal(StatusFilter::All);
    let exploring = create_rw_signal(None::<Appointment>);
    let editing = create_rw_signal(None::<Appointment>);

    let appointments = Signal::derive(move || {
        list.get()
            .and_then(Result::ok)
            .map(|(items, _)| items)
            .unwrap_or_default()
    });
    let lookups = Signal::derive(move || {
        list.get()
            .and_then(Result::ok)
            .map(|(_, lookups)| lookups)
            .unwrap_or_default()
    });
    let error = Signal::derive(move || match list.get() {
        Some(Ok((_, lookups))) => lookups.error,
        Some(Err(err)) => Some(err),
        None => None,
    });
    let visible = create_memo(move |_| {
        appointments.with(|items| search.with(|needle| filter_appointments(items, needle, status.get())))
    });

    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <div class="flex flex-col md:flex-row gap-3">
                <input
                    type="search"
                    class=INPUT_CLASS
                    placeholder="Search by name, phone, service or status"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class=format!("{} md:w-48", INPUT_CLASS)
                    on:change=move |ev| status.set(StatusFilter::parse(&event_target_value(&ev)))
                >
                    {StatusFilter::OPTIONS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.as_str() prop:selected=move || status.get() == option>
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <InlineErrorMessage error=error/>
            <Show when=move || list.loading().get()>
                <LoadingSpinner/>
            </Show>
            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=move || {
                    view! {
                        <Show when=move || !list.loading().get() && error.get().is_none()>
                            <EmptyState title="No bookings found"/>
                        </Show>
                    }
                }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-3 py-2 text-left">"Customer"</th>
                                <th class="px-3 py-2 text-left">"Phone"</th>
                                <th class="px-3 py-2 text-left">"Services"</th>
                                <th class="px-3 py-2 text-left">"Employee"</th>
                                <th class="px-3 py-2 text-left">"Date"</th>
                                <th class="px-3 py-2 text-right">"Amount"</th>
                                <th class="px-3 py-2 text-left">"Payment"</th>
                                <th class="px-3 py-2"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            // unkeyed: an edited row keeps its id but must re-render
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|appt| {
                                        view! { <BookingRow appt=appt exploring=exploring editing=editing/> }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
        {move || {
            exploring
                .get()
                .map(|appt| {
                    view! {
                        <ExploreModal
                            appointment=appt
                            on_close=Callback::new(move |_| exploring.set(None))
                        />
                    }
                })
        }}
        {move || {
            let repository = repository.clone();
            editing
                .get()
                .map(move |appt| {
                    view! {
                        <EditBookingModal
                            appointment=appt
                            repository=repository
                            lookups=lookups
                            on_close=Callback::new(move |_| editing.set(None))
                            on_saved=Callback::new(move |_| {
                                editing.set(None);
                                reload.update(|n| *n += 1);
                            })
                        />
                    }
                })
        }}
    }
}

#[component]
fn BookingRow(
    appt: Appointment,
    exploring: RwSignal<Option<Appointment>>,
    editing: RwSignal<Option<Appointment>>,
) -> impl IntoView {
    let explore_target = appt.clone();
    let edit_target = appt.clone();
    view! {
        <tr>
            <td class="px-3 py-2 font-medium">{appt.customer_name().to_string()}</td>
            <td class="px-3 py-2">{appt.customer_phone().to_string()}</td>
            <td class="px-3 py-2">{appt.service_names()}</td>
            <td class="px-3 py-2">{appt.employee_name().unwrap_or("-").to_string()}</td>
            <td class="px-3 py-2">{appt.date.map(format_date).unwrap_or_default()}</td>
            <td class="px-3 py-2 text-right">{format_rupees(appt.amount)}</td>
            <td class="px-3 py-2">
                <span class=format!(
                    "inline-flex rounded-full px-2 py-0.5 text-xs font-semibold {}",
                    status_badge_class(appt.payment_status),
                )>{appt.payment_status.label()}</span>
            </td>
            <td class="px-3 py-2 whitespace-nowrap text-right space-x-2">
                <button
                    type="button"
                    class="text-link hover:underline"
                    on:click=move |_| exploring.set(Some(explore_target.clone()))
                >
                    "Explore"
                </button>
                <button
                    type="button"
                    class="text-link hover:underline"
                    on:click=move |_| editing.set(Some(edit_target.clone()))
                >
                    "Edit"
                </button>
            </td>
        </tr>
    }
}
