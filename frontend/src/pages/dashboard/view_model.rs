use super::{repository::DashboardRepository, utils::DashboardReport};
use crate::{
    api::{ApiClient, ApiError},
    utils::time::{current_year, today_in_app_tz},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub report: Resource<(), Result<DashboardReport, ApiError>>,
    pub loading: Signal<bool>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = DashboardRepository::new_with_client(Rc::new(api));
        let report = create_resource(
            || (),
            move |_| {
                let repo = repository.clone();
                async move { repo.fetch_report(today_in_app_tz(), current_year()).await }
            },
        );
        let loading = Signal::derive(move || report.loading().get() || report.with(Option::is_none));
        Self { report, loading }
    }

    pub fn data(&self) -> Option<DashboardReport> {
        self.report.get().and_then(Result::ok)
    }

    pub fn error(&self) -> Option<ApiError> {
        self.report.get().and_then(Result::err)
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
