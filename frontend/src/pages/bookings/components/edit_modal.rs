use super::booking_fields::BookingFields;
use crate::{
    api::{ApiError, Appointment},
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::LoadingSpinner,
        modal::Modal,
    },
    pages::bookings::{
        form::BookingForm,
        repository::{BookingLookups, BookingsRepository},
        view_model::submit_edit,
    },
    state::notifications::use_notifications,
    utils::{task::TaskScope, time::today_in_app_tz},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EditBookingModal(
    appointment: Appointment,
    repository: BookingsRepository,
    #[prop(into)] lookups: Signal<BookingLookups>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let form = create_rw_signal(BookingForm::from_appointment(&appointment, today_in_app_tz()));
    let resolving = create_rw_signal(!appointment.services.is_empty());
    let error = create_rw_signal(None::<ApiError>);
    let scope = TaskScope::for_component();

    let resolve_repo = repository.clone();
    let saved = appointment.clone();
    create_effect(move |started: Option<()>| {
        if started.is_some() {
            return;
        }
        let repo = resolve_repo.clone();
        let saved = saved.clone();
        scope.spawn(async move { repo.resolve_lines(&saved).await }, move |lines| {
            form.update(|f| f.set_lines(lines));
            resolving.set(false);
        });
    });

    let id = appointment.id.clone();
    let save = create_action(move |draft: &BookingForm| {
        let repo = repository.clone();
        let id = id.clone();
        let draft = draft.clone();
        async move { submit_edit(&repo, id, &draft).await }
    });
    let pending = save.pending();

    create_effect(move |_| match save.value().get() {
        Some(Ok(response)) => {
            error.set(None);
            notifications.success(
                response
                    .message
                    .unwrap_or_else(|| "Booking updated".to_string()),
            );
            on_saved.call(());
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() || resolving.get_untracked() {
            return;
        }
        save.dispatch(form.get_untracked());
    };

    let services = Signal::derive(move || lookups.get().services);
    let employees = Signal::derive(move || lookups.get().employees);

    view! {
        <Modal title="Edit booking" on_close=on_close wide=true>
            <form class="space-y-6" on:submit=on_submit>
                <Show when=move || resolving.get()>
                    <LoadingSpinner/>
                </Show>
                <BookingFields form=form services=services employees=employees/>
                <InlineErrorMessage error=error/>
                <div class="flex justify-end gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=move |_| on_close.call(())
                        attr:type="button"
                    >
                        "Cancel"
                    </Button>
                    <Button
                        loading=pending
                        disabled=MaybeSignal::derive(move || resolving.get())
                        attr:type="submit"
                    >
                        {move || if pending.get() { "Saving..." } else { "Save changes" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
