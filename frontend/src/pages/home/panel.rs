use super::{
    components::{
        appointment_form::AppointmentRequestForm, hero::HeroSection, services::ServicesShowcase,
    },
    view_model::use_home_view_model,
};
use leptos::*;

#[component]
pub fn HomePanel() -> impl IntoView {
    let vm = use_home_view_model();
    let services = Signal::derive(move || vm.catalog());
    view! {
        <div class="min-h-screen bg-surface">
            <HeroSection/>
            <ServicesShowcase services=services/>
            <AppointmentRequestForm vm=vm/>
            <footer class="py-6 text-center text-sm text-fg-muted">
                {format!("© {} Salon", crate::utils::time::current_year())}
            </footer>
        </div>
    }
}
