use crate::{pages::dashboard::utils::DashboardReport, utils::money::format_rupees};
use leptos::*;

#[component]
fn SummaryCard(#[prop(into)] title: String, value: String) -> impl IntoView {
    view! {
        <div class="p-5 rounded-lg shadow bg-surface-elevated border border-border">
            <h2 class="text-sm font-semibold text-fg-muted">{title}</h2>
            <p class="mt-2 text-3xl font-bold text-fg">{value}</p>
        </div>
    }
}

#[component]
pub fn SummaryCards(report: DashboardReport) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            <SummaryCard title="Today's Revenue" value=format_rupees(report.today_revenue)/>
            <SummaryCard title="Today's Appointments" value=report.today_appointments.to_string()/>
            <SummaryCard title="Staff Count" value=report.staff_count.to_string()/>
        </div>
    }
}
