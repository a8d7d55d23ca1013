use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::DashboardPanel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <DashboardPanel /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{
        components::{revenue_chart::RevenueChart, summary::SummaryCards},
        utils::{monthly_scaffold, DashboardReport},
        *,
    };
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_shows_spinner_until_report_loads() {
        let html = render_to_string(|| view! { <DashboardPage/> });
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("Today's Revenue"));
    }

    #[test]
    fn cards_and_chart_render_report_values() {
        let html = render_to_string(|| {
            let report = DashboardReport {
                today_revenue: 125000,
                today_appointments: 7,
                staff_count: 3,
                staff: Vec::new(),
                monthly: monthly_scaffold(&[], 2025),
            };
            view! {
                <SummaryCards report=report.clone()/>
                <RevenueChart bars=report.monthly year=2025/>
            }
        });
        assert!(html.contains("₹1,25,000"));
        assert!(html.contains("Monthly Revenue 2025"));
        assert!(html.contains("Dec"));
        assert!(html.contains("height: 0%"));
    }
}
