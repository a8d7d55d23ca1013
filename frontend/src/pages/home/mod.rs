use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::HomePanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <HomePanel /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn landing_page_has_hero_services_and_form() {
        let html = render_to_string(|| view! { <HomePage/> });
        assert!(html.contains("Book Appointment"));
        assert!(html.contains("Our Services"));
        assert!(html.contains("Confirm Appointment"));
        assert!(html.contains("href=\"/login\""));
    }
}
