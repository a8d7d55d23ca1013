use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    api::{
        ApiError, Appointment, AppointmentPayload, AppointmentService, AppointmentSource,
        PaymentStatus, Service, ServiceLinePayload, SubService,
    },
    utils::money::parse_amount_input,
};

pub const GENDERS: [(&str, &str); 3] = [("male", "Male"), ("female", "Female"), ("other", "Other")];
pub const PAYMENT_MODES: [(&str, &str); 3] = [("cash", "Cash"), ("upi", "UPI"), ("card", "Card")];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingValidationError {
    #[error("Customer name is required")]
    MissingName,
    #[error("Phone number is required")]
    MissingPhone,
    #[error("Please select an employee")]
    MissingEmployee,
    #[error("Select at least one service and sub-service")]
    MissingService,
    #[error("Please pick a date")]
    MissingDate,
    #[error("{0}")]
    InvalidAmount(String),
}

impl From<BookingValidationError> for ApiError {
    fn from(error: BookingValidationError) -> Self {
        ApiError::validation(error.to_string())
    }
}

/// One service row of the booking form; `key` keeps the row stable in keyed lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLine {
    pub key: Uuid,
    pub service_id: Option<String>,
    pub sub_service_id: Option<String>,
    pub options: Vec<SubService>,
    pub price: Option<i64>,
    pub duration: Option<String>,
}

impl Default for ServiceLine {
    fn default() -> Self {
        Self {
            key: Uuid::new_v4(),
            service_id: None,
            sub_service_id: None,
            options: Vec::new(),
            price: None,
            duration: None,
        }
    }
}

impl ServiceLine {
    /// Rebuilds a saved line. `service` is `None` when its lookup failed: the
    /// line then has no options but still carries the stored ids and price, so
    /// saving sends it back unchanged.
    pub fn from_saved(saved: &AppointmentService, service: Option<&Service>) -> Self {
        ServiceLine {
            service_id: service
                .map(|s| s.id.clone())
                .or_else(|| saved.service_id.as_ref().map(|r| r.id.clone())),
            sub_service_id: saved.sub_service_id.clone(),
            options: service.map(|s| s.sub_services.clone()).unwrap_or_default(),
            price: Some(saved.price),
            duration: saved.duration.clone(),
            ..ServiceLine::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.service_id.is_some() && self.sub_service_id.is_some()
    }

    pub fn select_service(&mut self, service: Option<&Service>) {
        self.service_id = service.map(|s| s.id.clone());
        self.options = service.map(|s| s.sub_services.clone()).unwrap_or_default();
        self.sub_service_id = None;
        self.price = None;
        self.duration = None;
    }

    pub fn select_sub_service(&mut self, sub_service_id: &str) {
        match self.options.iter().find(|sub| sub.id == sub_service_id) {
            Some(sub) => {
                self.sub_service_id = Some(sub.id.clone());
                self.price = Some(sub.price);
                self.duration = sub.duration.clone();
            }
            None => {
                self.sub_service_id = None;
                self.price = None;
                self.duration = None;
            }
        }
    }

    fn to_payload(&self) -> Option<ServiceLinePayload> {
        Some(ServiceLinePayload {
            service_id: self.service_id.clone()?,
            sub_service_id: self.sub_service_id.clone()?,
            price: self.price.unwrap_or_default(),
            duration: self.duration.clone(),
        })
    }
}

/// Staff-side booking form shared by the add tab and the edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
    pub address: String,
    pub note: String,
    pub lines: Vec<ServiceLine>,
    pub employee_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub payment_mode: String,
    /// `None` follows the suggested total; `Some` holds what staff typed.
    pub amount_input: Option<String>,
    pub source: AppointmentSource,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl BookingForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            gender: String::new(),
            address: String::new(),
            note: String::new(),
            lines: vec![ServiceLine::default()],
            employee_id: None,
            date: Some(today),
            payment_mode: String::new(),
            amount_input: None,
            source: AppointmentSource::WalkIn,
        }
    }

    /// Prefills the form from a saved appointment; service lines are resolved separately.
    pub fn from_appointment(appointment: &Appointment, today: NaiveDate) -> Self {
        let customer = appointment.customer.clone().unwrap_or_default();
        let lines = appointment
            .services
            .iter()
            .map(|saved| ServiceLine::from_saved(saved, None))
            .collect::<Vec<_>>();
        let source = match appointment.source.as_deref() {
            Some("walk-in") | Some("admin") => AppointmentSource::WalkIn,
            _ => AppointmentSource::Online,
        };
        let mut form = Self {
            name: customer.name,
            phone: customer.phone,
            email: customer.email.unwrap_or_default(),
            gender: customer.gender.unwrap_or_default(),
            address: customer.address.unwrap_or_default(),
            note: appointment.note.clone().unwrap_or_default(),
            lines,
            employee_id: appointment.employee_id.as_ref().map(|e| e.id.clone()),
            date: appointment.date.or(Some(today)),
            payment_mode: appointment.payment_mode().unwrap_or_default().to_string(),
            amount_input: Some(if appointment.amount > 0 {
                appointment.amount.to_string()
            } else {
                String::new()
            }),
            source,
        };
        form.ensure_line();
        form
    }

    fn ensure_line(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(ServiceLine::default());
        }
    }

    pub fn set_lines(&mut self, lines: Vec<ServiceLine>) {
        self.lines = lines;
        self.ensure_line();
    }

    pub fn add_line(&mut self) {
        self.lines.push(ServiceLine::default());
    }

    /// Removing the last remaining line leaves a fresh empty one.
    pub fn remove_line(&mut self, key: Uuid) {
        self.lines.retain(|line| line.key != key);
        self.ensure_line();
    }

    pub fn select_service(&mut self, key: Uuid, service: Option<&Service>) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.key == key) {
            line.select_service(service);
        }
    }

    pub fn select_sub_service(&mut self, key: Uuid, sub_service_id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.key == key) {
            line.select_sub_service(sub_service_id);
        }
    }

    pub fn suggested_amount(&self) -> i64 {
        self.lines.iter().filter_map(|line| line.price).sum()
    }

    pub fn amount_text(&self) -> String {
        match &self.amount_input {
            Some(text) => text.clone(),
            None => match self.suggested_amount() {
                0 => String::new(),
                total => total.to_string(),
            },
        }
    }

    pub fn set_amount_text(&mut self, text: String) {
        self.amount_input = Some(text);
    }

    fn amount_value(&self) -> Result<Option<i64>, BookingValidationError> {
        parse_amount_input(&self.amount_text()).map_err(BookingValidationError::InvalidAmount)
    }

    pub fn validate(&self) -> Result<(), BookingValidationError> {
        if self.name.trim().is_empty() {
            return Err(BookingValidationError::MissingName);
        }
        if self.phone.trim().is_empty() {
            return Err(BookingValidationError::MissingPhone);
        }
        if self.employee_id.is_none() {
            return Err(BookingValidationError::MissingEmployee);
        }
        if !self.lines.iter().any(ServiceLine::is_complete) {
            return Err(BookingValidationError::MissingService);
        }
        if self.date.is_none() {
            return Err(BookingValidationError::MissingDate);
        }
        self.amount_value().map(|_| ())
    }

    fn build_payload(
        &self,
        source: AppointmentSource,
        payment_status: Option<PaymentStatus>,
    ) -> Result<AppointmentPayload, BookingValidationError> {
        self.validate()?;
        let date = self.date.ok_or(BookingValidationError::MissingDate)?;
        Ok(AppointmentPayload {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: optional(&self.email),
            gender: optional(&self.gender),
            address: optional(&self.address),
            note: optional(&self.note),
            services: self.lines.iter().filter_map(ServiceLine::to_payload).collect(),
            employee_id: self.employee_id.clone(),
            date,
            amount: self.amount_value()?.unwrap_or_default(),
            payment_mode: optional(&self.payment_mode),
            payment_status,
            source,
            confirmation_status: true,
            seen: None,
        })
    }

    /// Payload for a walk-in booking entered by staff.
    pub fn to_create_payload(&self) -> Result<AppointmentPayload, BookingValidationError> {
        self.build_payload(AppointmentSource::WalkIn, None)
    }

    /// Payload for `PUT /appointments/{id}`. An amount together with a payment
    /// mode always marks the payment completed.
    pub fn to_update_payload(&self) -> Result<AppointmentPayload, BookingValidationError> {
        let paid = self.amount_value()?.is_some() && optional(&self.payment_mode).is_some();
        self.build_payload(self.source, paid.then_some(PaymentStatus::Completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::EntityRef,
        test_support::helpers::{appointment, catalog, sub_service},
    };
    use serde_json::json;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    fn haircut_catalog() -> Vec<Service> {
        vec![Service {
            id: "s1".into(),
            name: "Haircut".into(),
            description: None,
            sub_services: vec![sub_service("ss1", "Men", 500, None)],
        }]
    }

    fn filled_form() -> BookingForm {
        let services = haircut_catalog();
        let mut form = BookingForm::new(day());
        form.name = "Priya".into();
        form.phone = "9999999999".into();
        form.employee_id = Some("e1".into());
        let key = form.lines[0].key;
        form.select_service(key, services.first());
        form.select_sub_service(key, "ss1");
        form
    }

    #[test]
    fn new_form_has_one_empty_line_and_today() {
        let form = BookingForm::new(day());
        assert_eq!(form.lines.len(), 1);
        assert!(!form.lines[0].is_complete());
        assert_eq!(form.date, Some(day()));
        assert_eq!(form.amount_text(), "");
    }

    #[test]
    fn selecting_service_resets_sub_service_and_price() {
        let services = catalog();
        let mut form = BookingForm::new(day());
        let key = form.lines[0].key;
        form.select_service(key, services.first());
        form.select_sub_service(key, "ss2");
        assert_eq!(form.lines[0].price, Some(1200));

        form.select_service(key, services.get(1));
        let line = &form.lines[0];
        assert_eq!(line.service_id.as_deref(), Some("s2"));
        assert!(line.sub_service_id.is_none());
        assert!(line.price.is_none());
        assert!(line.duration.is_none());
        assert_eq!(line.options.len(), 1);
    }

    #[test]
    fn sub_service_price_always_matches_listing() {
        let services = catalog();
        for service in &services {
            for sub in &service.sub_services {
                let mut line = ServiceLine::default();
                line.select_service(Some(service));
                line.select_sub_service(&sub.id);
                assert_eq!(line.price, Some(sub.price));
                assert_eq!(line.duration, sub.duration);
            }
        }
    }

    #[test]
    fn unknown_sub_service_clears_line_pricing() {
        let services = catalog();
        let mut line = ServiceLine::default();
        line.select_service(services.first());
        line.select_sub_service("ss1");
        line.select_sub_service("missing");
        assert!(line.sub_service_id.is_none());
        assert!(line.price.is_none());
    }

    #[test]
    fn suggested_amount_sums_lines_until_overridden() {
        let services = catalog();
        let mut form = BookingForm::new(day());
        let first = form.lines[0].key;
        form.select_service(first, services.first());
        form.select_sub_service(first, "ss1");
        form.add_line();
        let second = form.lines[1].key;
        form.select_service(second, services.get(1));
        form.select_sub_service(second, "ss3");
        assert_eq!(form.suggested_amount(), 900);
        assert_eq!(form.amount_text(), "900");

        form.set_amount_text("850".into());
        assert_eq!(form.amount_text(), "850");
        assert_eq!(form.suggested_amount(), 900);
    }

    #[test]
    fn removing_last_line_keeps_one_row() {
        let mut form = BookingForm::new(day());
        form.add_line();
        let keys: Vec<_> = form.lines.iter().map(|l| l.key).collect();
        form.remove_line(keys[0]);
        assert_eq!(form.lines.len(), 1);
        assert_eq!(form.lines[0].key, keys[1]);
        form.remove_line(keys[1]);
        assert_eq!(form.lines.len(), 1);
        assert_ne!(form.lines[0].key, keys[1]);
    }

    #[test]
    fn validation_reports_first_missing_field() {
        let mut form = BookingForm::new(day());
        assert_eq!(form.validate(), Err(BookingValidationError::MissingName));
        form.name = "Priya".into();
        assert_eq!(form.validate(), Err(BookingValidationError::MissingPhone));
        form.phone = "9999999999".into();
        assert_eq!(form.validate(), Err(BookingValidationError::MissingEmployee));
        form.employee_id = Some("e1".into());
        assert_eq!(form.validate(), Err(BookingValidationError::MissingService));

        let mut complete = filled_form();
        complete.date = None;
        assert_eq!(complete.validate(), Err(BookingValidationError::MissingDate));
        complete.date = Some(day());
        complete.set_amount_text("-5".into());
        assert!(matches!(
            complete.validate(),
            Err(BookingValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn create_payload_matches_walk_in_booking() {
        let payload = filled_form().to_create_payload().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Priya",
                "phone": "9999999999",
                "services": [{ "service_id": "s1", "sub_service_id": "ss1", "price": 500 }],
                "employee_id": "e1",
                "date": "2025-01-10",
                "amount": 500,
                "source": "walk-in",
                "confirmation_status": true
            })
        );
    }

    #[test]
    fn incomplete_lines_are_left_out_of_payload() {
        let mut form = filled_form();
        form.add_line();
        let payload = form.to_create_payload().unwrap();
        assert_eq!(payload.services.len(), 1);
    }

    #[test]
    fn update_payload_marks_completed_when_amount_and_mode_present() {
        for prior in ["pending", "refunded", "completed"] {
            let saved = appointment("a1", "Priya", "9999999999", "Hair", prior);
            let mut form = BookingForm::from_appointment(&saved, day());
            form.set_lines(vec![ServiceLine::from_saved(&saved.services[0], catalog().first())]);
            form.set_amount_text("800".into());
            form.payment_mode = "cash".into();
            let payload = form.to_update_payload().unwrap();
            assert_eq!(payload.payment_status, Some(PaymentStatus::Completed));
            assert!(payload.confirmation_status);
            assert_eq!(payload.amount, 800);
        }
    }

    #[test]
    fn update_payload_leaves_status_alone_without_payment_mode() {
        let saved = appointment("a1", "Priya", "9999999999", "Hair", "pending");
        let mut form = BookingForm::from_appointment(&saved, day());
        form.set_lines(vec![ServiceLine::from_saved(&saved.services[0], catalog().first())]);
        let payload = form.to_update_payload().unwrap();
        assert_eq!(payload.payment_status, None);
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("payment_status").is_none());
    }

    #[test]
    fn from_appointment_prefills_customer_and_amount() {
        let saved = appointment("a1", "Priya", "9999999999", "Hair", "pending");
        let form = BookingForm::from_appointment(&saved, day());
        assert_eq!(form.name, "Priya");
        assert_eq!(form.phone, "9999999999");
        assert_eq!(form.employee_id.as_deref(), Some("e1"));
        assert_eq!(form.amount_text(), "500");
        assert_eq!(form.source, AppointmentSource::WalkIn);
        assert_eq!(form.lines.len(), 1);
        assert!(form.lines[0].options.is_empty());
        assert_eq!(form.lines[0].price, Some(500));
    }

    #[test]
    fn saved_line_with_failed_lookup_keeps_ids_and_price() {
        let saved = AppointmentService {
            service_id: Some(EntityRef {
                id: "s9".into(),
                name: None,
            }),
            sub_service_id: Some("ss9".into()),
            price: 650,
            duration: None,
        };
        let line = ServiceLine::from_saved(&saved, None);
        assert_eq!(line.price, Some(650));
        assert!(line.options.is_empty());
        assert!(line.is_complete());
        assert_eq!(
            line.to_payload(),
            Some(ServiceLinePayload {
                service_id: "s9".into(),
                sub_service_id: "ss9".into(),
                price: 650,
                duration: None,
            })
        );

        let orphan = AppointmentService {
            service_id: None,
            ..saved
        };
        assert!(!ServiceLine::from_saved(&orphan, None).is_complete());
    }

    #[test]
    fn resolved_line_gets_options_and_keeps_saved_choice() {
        let saved = AppointmentService {
            service_id: Some(EntityRef {
                id: "s1".into(),
                name: Some("Hair".into()),
            }),
            sub_service_id: Some("ss1".into()),
            price: 650,
            duration: None,
        };
        let resolved = ServiceLine::from_saved(&saved, catalog().first());
        assert_eq!(resolved.sub_service_id.as_deref(), Some("ss1"));
        assert_eq!(resolved.options.len(), 2);
        assert_eq!(resolved.price, Some(650));
    }
}
