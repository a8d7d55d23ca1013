use super::{
    repository::AttendanceRepository,
    utils::{build_attendance_marks, next_selection, DisplayMonth, MarkOutcome},
};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, Employee},
    state::notifications::{use_notifications, NotificationCenter},
    utils::time::today_in_app_tz,
};
use chrono::NaiveDate;
use leptos::*;
use std::{collections::HashSet, rc::Rc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordsQuery {
    pub employee_id: Option<String>,
    pub token: u32,
}

impl RecordsQuery {
    pub fn select(&self, employee_id: Option<String>) -> Self {
        Self {
            employee_id,
            token: self.token.wrapping_add(1),
        }
    }

    pub fn refresh(&self) -> Self {
        self.select(self.employee_id.clone())
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub roster: Resource<(), Result<Vec<Employee>, ApiError>>,
    pub present: RwSignal<HashSet<String>>,
    pub mark_action: Action<(), MarkOutcome>,
    pub query: RwSignal<RecordsQuery>,
    pub records: Resource<RecordsQuery, Result<Vec<AttendanceRecord>, ApiError>>,
    pub month: RwSignal<DisplayMonth>,
    pub editing: RwSignal<Option<AttendanceRecord>>,
    pub update_action: Action<(String, bool), Result<(), ApiError>>,
}

impl AttendanceViewModel {
    pub fn roster_list(&self) -> Vec<Employee> {
        self.roster.get().and_then(Result::ok).unwrap_or_default()
    }

    pub fn selected_id(&self) -> Option<String> {
        self.query.with(|q| q.employee_id.clone())
    }

    pub fn select_employee(&self, employee_id: &str) {
        let current = self.query.with_untracked(|q| q.employee_id.clone());
        let next = next_selection(current.as_deref(), employee_id);
        self.editing.set(None);
        self.query.update(|q| *q = q.select(next));
    }

    /// Only days that already have a record can be edited.
    pub fn open_day(&self, record: Option<AttendanceRecord>) {
        if let Some(record) = record {
            self.editing.set(Some(record));
        }
    }
}

pub async fn submit_attendance(
    repo: &AttendanceRepository,
    roster: &[Employee],
    present: &HashSet<String>,
    date: NaiveDate,
    notifications: NotificationCenter,
) -> MarkOutcome {
    let outcome = repo
        .mark_all(build_attendance_marks(roster, present, date))
        .await;
    if outcome.is_success() {
        notifications.success(outcome.message());
    } else {
        notifications.error(outcome.message());
    }
    outcome
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceRepository::new_with_client(Rc::new(api));
    let notifications = use_notifications();

    let repo_for_roster = repository.clone();
    let roster = create_resource(
        || (),
        move |_| {
            let repo = repo_for_roster.clone();
            async move { repo.fetch_roster().await }
        },
    );
    let present = create_rw_signal(HashSet::<String>::new());

    let repo_for_mark = repository.clone();
    let mark_action = create_action(move |_: &()| {
        let repo = repo_for_mark.clone();
        let list = untrack(|| roster.get()).and_then(Result::ok).unwrap_or_default();
        let checked = present.get_untracked();
        async move {
            submit_attendance(&repo, &list, &checked, today_in_app_tz(), notifications).await
        }
    });

    let query = create_rw_signal(RecordsQuery {
        employee_id: None,
        token: 0,
    });
    let repo_for_records = repository.clone();
    let records = create_resource(
        move || query.get(),
        move |query| {
            let repo = repo_for_records.clone();
            async move {
                match query.employee_id {
                    Some(id) => repo.fetch_records(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let month = create_rw_signal(DisplayMonth::containing(today_in_app_tz()));
    let editing = create_rw_signal(None::<AttendanceRecord>);

    let update_action = create_action(move |(record_id, leave): &(String, bool)| {
        let repo = repository.clone();
        let record_id = record_id.clone();
        let leave = *leave;
        async move { repo.set_leave(record_id, leave).await.map(|_| ()) }
    });

    create_effect(move |_| match update_action.value().get() {
        Some(Ok(())) => {
            editing.set(None);
            notifications.success("Attendance updated");
            query.update(|q| *q = q.refresh());
        }
        Some(Err(err)) => {
            notifications.error(err.error);
        }
        None => {}
    });

    AttendanceViewModel {
        roster,
        present,
        mark_action,
        query,
        records,
        month,
        editing,
        update_action,
    }
}
