use crate::api::{Appointment, PaymentStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PaymentStatus),
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(PaymentStatus::Pending),
        StatusFilter::Only(PaymentStatus::Completed),
        StatusFilter::Only(PaymentStatus::Refunded),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn parse(raw: &str) -> StatusFilter {
        PaymentStatus::parse(raw)
            .map(StatusFilter::Only)
            .unwrap_or_default()
    }

    pub fn matches(&self, status: PaymentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

fn matches_search(appointment: &Appointment, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        appointment.customer_name().to_lowercase(),
        appointment.customer_phone().to_lowercase(),
        appointment.service_names().to_lowercase(),
        appointment.payment_status.as_str().to_string(),
    ]
    .iter()
    .any(|haystack| haystack.contains(needle))
}

/// Case-insensitive search over name, phone, service names and payment
/// status, combined with the status filter.
pub fn filter_appointments(
    appointments: &[Appointment],
    search: &str,
    filter: StatusFilter,
) -> Vec<Appointment> {
    let needle = search.trim().to_lowercase();
    appointments
        .iter()
        .filter(|appt| filter.matches(appt.payment_status) && matches_search(appt, &needle))
        .cloned()
        .collect()
}
