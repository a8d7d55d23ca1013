use super::{repository::HomeRepository, utils::PublicBookingForm};
use crate::{
    api::{ApiClient, ApiError, MessageResponse, Service},
    state::notifications::{use_notifications, NotificationCenter},
};
use leptos::*;
use std::rc::Rc;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Server-supplied text when there is one; transport failures get a generic line.
pub fn public_error_message(err: &ApiError) -> String {
    if err.code == "REQUEST_FAILED" || err.error.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        err.error.clone()
    }
}

pub async fn submit_public_booking(
    repo: &HomeRepository,
    form: &PublicBookingForm,
    catalog: &[Service],
    notifications: NotificationCenter,
) -> Result<MessageResponse, ApiError> {
    let payload = match form.to_payload(catalog) {
        Ok(payload) => payload,
        Err(err) => {
            let err = ApiError::from(err);
            notifications.error(err.error.clone());
            return Err(err);
        }
    };
    match repo.request_appointment(payload).await {
        Ok(response) => {
            notifications.success(format!(
                "Thank you {}! We will call you to confirm your appointment.",
                form.name.trim()
            ));
            Ok(response)
        }
        Err(err) => {
            notifications.error(public_error_message(&err));
            Err(err)
        }
    }
}

#[derive(Clone, Copy)]
pub struct HomeViewModel {
    pub services: Resource<(), Result<Vec<Service>, ApiError>>,
    pub form: RwSignal<PublicBookingForm>,
    pub submit_action: Action<PublicBookingForm, Result<MessageResponse, ApiError>>,
}

impl HomeViewModel {
    pub fn catalog(&self) -> Vec<Service> {
        self.services.get().and_then(Result::ok).unwrap_or_default()
    }
}

pub fn use_home_view_model() -> HomeViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = HomeRepository::new_with_client(Rc::new(api));
    let notifications = use_notifications();

    let repo_for_services = repository.clone();
    let services = create_resource(
        || (),
        move |_| {
            let repo = repo_for_services.clone();
            async move { repo.fetch_services().await }
        },
    );
    let form = create_rw_signal(PublicBookingForm::default());

    let submit_action = create_action(move |draft: &PublicBookingForm| {
        let repo = repository.clone();
        let draft = draft.clone();
        let catalog = untrack(|| services.get()).and_then(Result::ok).unwrap_or_default();
        async move { submit_public_booking(&repo, &draft, &catalog, notifications).await }
    });

    create_effect(move |_| {
        if let Some(Ok(_)) = submit_action.value().get() {
            form.set(PublicBookingForm::default());
        }
    });

    HomeViewModel {
        services,
        form,
        submit_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{state::session::SessionStore, test_support::helpers::catalog};
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo_for(server: &MockServer) -> HomeRepository {
        let client = ApiClient::new_with_base_url(server.base_url())
            .with_session(SessionStore::in_memory());
        HomeRepository::new_with_client(Rc::new(client))
    }

    fn form() -> PublicBookingForm {
        let mut form = PublicBookingForm {
            name: "Meera".into(),
            phone: "9123456789".into(),
            date: NaiveDate::from_ymd_opt(2025, 2, 1),
            ..PublicBookingForm::default()
        };
        form.select_service("s2");
        form.select_sub_service("ss3");
        form
    }

    #[tokio::test]
    async fn public_request_posts_without_auth_or_employee() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/appointments")
                .json_body_partial(
                    json!({ "source": "online", "confirmation_status": false, "seen": false, "amount": 400 })
                        .to_string(),
                );
            then.status(201).json_body(json!({ "message": "created" }));
        });
        let runtime = create_runtime();
        let notifications = NotificationCenter::new();

        submit_public_booking(&repo_for(&server), &form(), &catalog(), notifications)
            .await
            .unwrap();

        mock.assert();
        assert!(notifications.items().get()[0].message.contains("Meera"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn server_failure_surfaces_its_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/appointments");
            then.status(400).json_body(json!({ "message": "Date is fully booked" }));
        });
        let runtime = create_runtime();
        let notifications = NotificationCenter::new();

        let result =
            submit_public_booking(&repo_for(&server), &form(), &catalog(), notifications).await;

        assert!(result.is_err());
        assert_eq!(notifications.items().get()[0].message, "Date is fully booked");
        runtime.dispose();
    }

    #[tokio::test]
    async fn server_failure_without_body_uses_operation_fallback() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/appointments");
            then.status(500);
        });
        let runtime = create_runtime();
        let notifications = NotificationCenter::new();

        let _ = submit_public_booking(&repo_for(&server), &form(), &catalog(), notifications).await;

        assert_eq!(notifications.items().get()[0].message, "Failed to create appointment");
        runtime.dispose();
    }

    #[test]
    fn transport_failures_read_as_generic() {
        assert_eq!(
            public_error_message(&ApiError::request_failed("Request failed: connection refused")),
            GENERIC_FAILURE
        );
        assert_eq!(public_error_message(&ApiError::unknown("Slot taken")), "Slot taken");
    }

    #[tokio::test]
    async fn incomplete_form_notifies_without_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/appointments");
            then.status(201);
        });
        let runtime = create_runtime();
        let notifications = NotificationCenter::new();
        let mut draft = form();
        draft.select_service("s1");

        let err = submit_public_booking(&repo_for(&server), &draft, &catalog(), notifications)
            .await
            .unwrap_err();

        assert_eq!(err.code, "VALIDATION_ERROR");
        mock.assert_hits(0);
        assert_eq!(notifications.items().get()[0].message, "Please select a treatment");
        runtime.dispose();
    }
}
