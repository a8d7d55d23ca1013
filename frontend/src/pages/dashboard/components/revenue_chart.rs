use crate::{
    pages::dashboard::utils::{bar_percent, MonthBar},
    utils::money::format_rupees,
};
use leptos::*;

/// Monthly revenue as plain CSS bars.
#[component]
pub fn RevenueChart(bars: Vec<MonthBar>, year: i32) -> impl IntoView {
    let max = bars.iter().map(|bar| bar.total).max().unwrap_or_default();
    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">{format!("Monthly Revenue {}", year)}</h2>
            <div class="flex items-end gap-2 h-56" role="img" aria-label="Monthly revenue">
                {bars
                    .into_iter()
                    .map(|bar| {
                        let height = bar_percent(bar.total, max);
                        view! {
                            <div class="flex-1 h-full flex flex-col items-center justify-end gap-1">
                                <div
                                    class="w-full rounded-t bg-action-primary-bg"
                                    style=format!("height: {}%", height)
                                    title=format!("{}: {}", bar.label, format_rupees(bar.total))
                                ></div>
                                <span class="text-xs text-fg-muted">{bar.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
