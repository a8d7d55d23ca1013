use crate::{
    api::Appointment,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::bookings::{triage::TriageState, view_model::{approve_online, BookingsViewModel}},
    utils::{money::format_rupees, time::format_date},
};
use leptos::*;

/// Unconfirmed online bookings, refreshed by the page's poller.
#[component]
pub fn OnlineBookings(vm: BookingsViewModel) -> impl IntoView {
    let triage = vm.triage;
    let notifications = vm.notifications;
    let repository = vm.repository.clone();
    let approve = create_action(move |id: &String| {
        let repo = repository.clone();
        let id = id.clone();
        async move { approve_online(&repo, id, triage, notifications).await }
    });
    let approving = approve.input();

    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6">
            <Show
                when=move || triage.with(|t| t.loaded)
                fallback=|| view! { <LoadingSpinner/> }
            >
                <Show
                    when=move || !triage.with(|t| t.pending.is_empty())
                    fallback=|| {
                        view! {
                            <EmptyState
                                title="No online bookings waiting"
                                description="New requests from the website appear here automatically."
                            />
                        }
                    }
                >
                    <ul class="divide-y divide-border">
                        <For
                            each=move || triage.with(|t: &TriageState| t.pending.clone())
                            key=|appt| appt.id.clone()
                            children=move |appt| {
                                let id = appt.id.clone();
                                let busy_id = id.clone();
                                let busy = move || approving.with(|current| current.as_deref() == Some(busy_id.as_str()));
                                view! {
                                    <li class="flex items-center justify-between py-3 gap-4">
                                        <OnlineSummary appt=appt/>
                                        <button
                                            type="button"
                                            class="rounded-md px-3 py-1.5 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                            disabled=busy.clone()
                                            on:click=move |_| approve.dispatch(id.clone())
                                        >
                                            {move || if busy() { "Approving..." } else { "Approve" }}
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn OnlineSummary(appt: Appointment) -> impl IntoView {
    view! {
        <div class="text-sm">
            <p class="font-medium text-fg">{appt.customer_name().to_string()}</p>
            <p class="text-fg-muted">
                {format!(
                    "{} · {} · {}",
                    appt.customer_phone(),
                    appt.date.map(format_date).unwrap_or_else(|| "-".to_string()),
                    format_rupees(appt.amount),
                )}
            </p>
            <p class="text-fg-muted">{appt.service_names()}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::appointment, ssr::render_to_string};

    #[test]
    fn summary_lists_contact_and_amount() {
        let html = render_to_string(|| {
            let appt = appointment("a1", "Guest", "9000000000", "Hair Spa", "pending");
            view! { <OnlineSummary appt=appt/> }
        });
        assert!(html.contains("Guest"));
        assert!(html.contains("9000000000"));
        assert!(html.contains("Hair Spa"));
    }
}
