use super::booking_fields::BookingFields;
use crate::{
    components::{common::Button, error::InlineErrorMessage, layout::LoadingSpinner},
    pages::bookings::{
        form::BookingForm,
        repository::BookingsRepository,
        view_model::submit_booking,
    },
    state::notifications::use_notifications,
    utils::time::today_in_app_tz,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AddBookingForm(repository: BookingsRepository) -> impl IntoView {
    let notifications = use_notifications();
    let form = create_rw_signal(BookingForm::new(today_in_app_tz()));

    let lookup_repo = repository.clone();
    let lookups = create_resource(
        || (),
        move |_| {
            let repo = lookup_repo.clone();
            async move { repo.fetch_lookups().await }
        },
    );
    let services = Signal::derive(move || lookups.get().map(|l| l.services).unwrap_or_default());
    let employees = Signal::derive(move || lookups.get().map(|l| l.employees).unwrap_or_default());
    let lookup_error = Signal::derive(move || lookups.get().and_then(|l| l.error));

    let submit = create_action(move |draft: &BookingForm| {
        let repo = repository.clone();
        let draft = draft.clone();
        async move { submit_booking(&repo, &draft, notifications).await }
    });
    let pending = submit.pending();

    create_effect(move |_| {
        if let Some(Ok(_)) = submit.value().get() {
            form.set(BookingForm::new(today_in_app_tz()));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        submit.dispatch(form.get_untracked());
    };

    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6">
            <Show when=move || lookups.loading().get()>
                <LoadingSpinner/>
            </Show>
            <InlineErrorMessage error=lookup_error/>
            <form class="space-y-6" on:submit=on_submit>
                <BookingFields form=form services=services employees=employees/>
                <div class="flex justify-end">
                    <Button loading=pending attr:type="submit">
                        {move || if pending.get() { "Saving..." } else { "Create booking" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
