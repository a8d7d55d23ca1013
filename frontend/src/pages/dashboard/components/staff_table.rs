use crate::{
    components::empty_state::EmptyState, pages::dashboard::utils::StaffDay,
    utils::money::format_rupees,
};
use leptos::*;

#[component]
pub fn StaffTable(staff: Vec<StaffDay>) -> impl IntoView {
    if staff.is_empty() {
        return view! { <EmptyState title="No staff on the roster"/> }.into_view();
    }
    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"Staff Performance (Today)"</h2>
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-3 py-2 text-left">"Staff"</th>
                        <th class="px-3 py-2 text-right">"Appointments"</th>
                        <th class="px-3 py-2 text-right">"Revenue"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {staff
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td class="px-3 py-2 font-medium">{row.name}</td>
                                    <td class="px-3 py-2 text-right">{row.count}</td>
                                    <td class="px-3 py-2 text-right">{format_rupees(row.total)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
