use super::utils::build_login_request;
use crate::{
    api::{ApiError, LoginRequest},
    router::landing_route,
    state::{auth, session::Session},
    utils::storage::navigate_to,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<Session, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match build_login_request(&self.email.get_untracked(), &self.password.get_untracked()) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err.into())),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => {
                    error.set(None);
                    password.set(String::new());
                    navigate_to(landing_route(session.role).path());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.email.get().is_empty());
        });
    }

    #[test]
    fn submit_with_missing_fields_sets_error_without_dispatch() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.email.set("desk@salon.test".into());
            vm.submit();
            let error = vm.error.get().unwrap();
            assert_eq!(error.error, "Please enter your password");
            assert_eq!(vm.login_action.version().get(), 0);
        });
    }
}
