use super::{form::BookingForm, repository::BookingsRepository, triage::TriageState};
use crate::{
    api::{ApiClient, ApiError, Appointment, MessageResponse},
    config,
    state::notifications::{use_notifications, NotificationCenter},
    utils::task::{spawn_polling, TaskScope},
};
use leptos::*;
use std::{rc::Rc, time::Duration};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingsTab {
    #[default]
    Add,
    List,
    Online,
}

impl BookingsTab {
    pub const ALL: [BookingsTab; 3] = [BookingsTab::Add, BookingsTab::List, BookingsTab::Online];

    pub fn label(&self) -> &'static str {
        match self {
            BookingsTab::Add => "Add Booking",
            BookingsTab::List => "Booking List",
            BookingsTab::Online => "Online",
        }
    }
}

#[derive(Clone)]
pub struct BookingsViewModel {
    pub repository: BookingsRepository,
    pub tab: RwSignal<BookingsTab>,
    pub triage: RwSignal<TriageState>,
    pub notifications: NotificationCenter,
}

impl BookingsViewModel {
    pub fn open_tab(&self, tab: BookingsTab) {
        self.tab.set(tab);
        if tab == BookingsTab::Online {
            self.triage.update(TriageState::mark_viewed);
        }
    }
}

pub fn use_bookings_view_model() -> BookingsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = BookingsRepository::new_with_client(Rc::new(api));
    let tab = create_rw_signal(BookingsTab::default());
    let triage = create_rw_signal(TriageState::default());
    let scope = TaskScope::for_component();

    // Effects only run in the browser, so polling never starts during SSR tests.
    let repo_for_poll = repository.clone();
    create_effect(move |started: Option<()>| {
        if started.is_some() {
            return;
        }
        let interval = Duration::from_secs(u64::from(config::poll_interval_secs()));
        let repo = repo_for_poll.clone();
        let poll_scope = scope.clone();
        spawn_polling(scope.clone(), interval, move || {
            let repo = repo.clone();
            let scope = poll_scope.clone();
            async move {
                match scope.guard(repo.fetch_unconfirmed()).await {
                    Some(Ok(items)) => {
                        let viewing = tab.get_untracked() == BookingsTab::Online;
                        triage.update(|state| apply_poll_for_tab(state, items, viewing));
                    }
                    Some(Err(err)) => log::warn!("online booking poll failed: {}", err),
                    None => {}
                }
            }
        });
    });

    BookingsViewModel {
        repository,
        tab,
        triage,
        notifications: use_notifications(),
    }
}

/// Folds a poll result into `state`; an open Online tab keeps it read.
pub fn apply_poll_for_tab(state: &mut TriageState, items: Vec<Appointment>, viewing: bool) {
    state.apply_poll(items);
    if viewing {
        state.mark_viewed();
    }
}

/// Validates and posts a staff booking. Validation failures are reported
/// without touching the network.
pub async fn submit_booking(
    repo: &BookingsRepository,
    form: &BookingForm,
    notifications: NotificationCenter,
) -> Result<MessageResponse, ApiError> {
    let payload = match form.to_create_payload() {
        Ok(payload) => payload,
        Err(err) => {
            let err = ApiError::from(err);
            notifications.error(err.error.clone());
            return Err(err);
        }
    };
    match repo.create(payload).await {
        Ok(response) => {
            notifications.success(
                response
                    .message
                    .clone()
                    .unwrap_or_else(|| "Booking created successfully".to_string()),
            );
            Ok(response)
        }
        Err(err) => {
            notifications.error(err.error.clone());
            Err(err)
        }
    }
}

/// Sends an edited booking; failures are returned for inline display.
pub async fn submit_edit(
    repo: &BookingsRepository,
    id: String,
    form: &BookingForm,
) -> Result<MessageResponse, ApiError> {
    let payload = form.to_update_payload().map_err(ApiError::from)?;
    repo.update(id, payload).await
}

pub async fn approve_online(
    repo: &BookingsRepository,
    id: String,
    triage: RwSignal<TriageState>,
    notifications: NotificationCenter,
) -> Result<(), ApiError> {
    match repo.approve(id.clone()).await {
        Ok(_) => {
            triage.update(|state| state.approved(&id));
            notifications.success("Appointment approved");
            Ok(())
        }
        Err(err) => {
            notifications.error(err.error.clone());
            Err(err)
        }
    }
}
