use crate::{
    api::Appointment,
    components::modal::Modal,
    utils::{money::format_rupees, time::format_date},
};
use leptos::*;

fn detail_rows(appt: &Appointment) -> Vec<(&'static str, String)> {
    let customer = appt.customer.clone().unwrap_or_default();
    let or_dash = |value: Option<String>| value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| "-".to_string());
    vec![
        ("Name", customer.name),
        ("Phone", customer.phone),
        ("Email", or_dash(customer.email)),
        ("Gender", or_dash(customer.gender)),
        ("Address", or_dash(customer.address)),
        ("Employee", or_dash(appt.employee_name().map(str::to_string))),
        ("Date", or_dash(appt.date.map(format_date))),
        ("Amount", format_rupees(appt.amount)),
        ("Payment mode", or_dash(appt.payment_mode().map(str::to_string))),
        ("Payment status", appt.payment_status.label().to_string()),
        ("Source", or_dash(appt.source.clone())),
        ("Note", or_dash(appt.note.clone())),
    ]
}

/// Read-only view of one booking.
#[component]
pub fn ExploreModal(appointment: Appointment, on_close: Callback<()>) -> impl IntoView {
    let rows = detail_rows(&appointment);
    let services = appointment
        .services
        .iter()
        .map(|line| {
            let name = line
                .service_id
                .as_ref()
                .and_then(|s| s.name.clone())
                .unwrap_or_else(|| "Service".to_string());
            let duration = line.duration.clone().map(|d| format!(" · {}", d)).unwrap_or_default();
            format!("{} ({}){}", name, format_rupees(line.price), duration)
        })
        .collect::<Vec<_>>();

    view! {
        <Modal title="Booking details" on_close=on_close>
            <dl class="grid grid-cols-3 gap-x-4 gap-y-2 text-sm">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <dt class="font-medium text-fg-muted">{label}</dt>
                            <dd class="col-span-2 text-fg">{value}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
            <h3 class="mt-4 mb-2 text-sm font-semibold text-fg">"Services"</h3>
            <ul class="list-disc pl-5 text-sm text-fg">
                {services.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::appointment;

    #[test]
    fn missing_fields_show_a_dash() {
        let appt = appointment("a1", "Priya", "9999999999", "Haircut", "pending");
        let rows = detail_rows(&appt);
        let lookup = |label: &str| rows.iter().find(|(l, _)| *l == label).map(|(_, v)| v.clone());
        assert_eq!(lookup("Name").as_deref(), Some("Priya"));
        assert_eq!(lookup("Email").as_deref(), Some("-"));
        assert_eq!(lookup("Employee").as_deref(), Some("Asha"));
        assert_eq!(lookup("Payment mode").as_deref(), Some("-"));
        assert_eq!(lookup("Source").as_deref(), Some("walk-in"));
    }
}
