use crate::pages::bookings::{
    components::{add_booking::AddBookingForm, booking_list::BookingList, online_list::OnlineBookings},
    view_model::{use_bookings_view_model, BookingsTab},
};
use leptos::*;

fn tab_class(active: bool) -> &'static str {
    if active {
        "relative px-4 py-2 text-sm font-semibold border-b-2 border-action-primary-bg text-fg"
    } else {
        "relative px-4 py-2 text-sm font-medium border-b-2 border-transparent text-fg-muted hover:text-fg"
    }
}

#[component]
pub fn BookingsPanel() -> impl IntoView {
    let vm = use_bookings_view_model();
    let tab = vm.tab;
    let triage = vm.triage;

    let tabs = {
        let vm = vm.clone();
        BookingsTab::ALL
            .into_iter()
            .map(move |item| {
                let vm = vm.clone();
                view! {
                    <button
                        type="button"
                        class=move || tab_class(tab.get() == item)
                        on:click=move |_| vm.open_tab(item)
                    >
                        {item.label()}
                        {(item == BookingsTab::Online).then(|| {
                            view! {
                                <Show when=move || triage.with(|t| t.unread_count() > 0)>
                                    <span class="ml-2 inline-flex items-center justify-center rounded-full bg-action-danger-bg px-2 text-xs font-bold text-action-danger-text">
                                        {move || triage.with(|t| t.unread_count())}
                                    </span>
                                </Show>
                            }
                        })}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-fg">"Bookings"</h1>
            <nav class="flex gap-2 border-b border-border">{tabs}</nav>
            {move || {
                let repository = vm.repository.clone();
                match tab.get() {
                    BookingsTab::Add => view! { <AddBookingForm repository=repository/> }.into_view(),
                    BookingsTab::List => view! { <BookingList repository=repository/> }.into_view(),
                    BookingsTab::Online => view! { <OnlineBookings vm=vm.clone()/> }.into_view(),
                }
            }}
        </div>
    }
}
