use super::{
    components::{revenue_chart::RevenueChart, staff_table::StaffTable, summary::SummaryCards},
    view_model::DashboardViewModel,
};
use crate::{
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    utils::time::current_year,
};
use leptos::*;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = DashboardViewModel::new();
    let error = Signal::derive(move || vm.error());

    view! {
        <div class="space-y-8">
            <h1 class="text-2xl font-bold text-fg">"Admin Dashboard"</h1>
            <InlineErrorMessage error=error/>
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner/> }>
                {move || {
                    vm.data()
                        .map(|report| {
                            view! {
                                <SummaryCards report=report.clone()/>
                                <StaffTable staff=report.staff.clone()/>
                                <RevenueChart bars=report.monthly year=current_year()/>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
