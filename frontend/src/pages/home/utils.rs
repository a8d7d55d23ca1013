use chrono::NaiveDate;
use thiserror::Error;

use crate::api::{
    ApiError, AppointmentPayload, AppointmentSource, Service, ServiceLinePayload, SubService,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublicBookingError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your phone number")]
    MissingPhone,
    #[error("Please select a service")]
    MissingService,
    #[error("Please select a treatment")]
    MissingSubService,
    #[error("Please pick a date")]
    MissingDate,
}

impl From<PublicBookingError> for ApiError {
    fn from(error: PublicBookingError) -> Self {
        ApiError::validation(error.to_string())
    }
}

/// Customer-facing request form; staff confirm these later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicBookingForm {
    pub name: String,
    pub phone: String,
    pub service_id: Option<String>,
    pub sub_service_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub note: String,
}

impl PublicBookingForm {
    pub fn select_service(&mut self, service_id: &str) {
        self.service_id = (!service_id.is_empty()).then(|| service_id.to_string());
        self.sub_service_id = None;
    }

    pub fn select_sub_service(&mut self, sub_service_id: &str) {
        self.sub_service_id = (!sub_service_id.is_empty()).then(|| sub_service_id.to_string());
    }

    pub fn chosen<'a>(&self, catalog: &'a [Service]) -> Option<(&'a Service, &'a SubService)> {
        let service = catalog
            .iter()
            .find(|s| Some(&s.id) == self.service_id.as_ref())?;
        let sub = service.sub_service(self.sub_service_id.as_deref()?)?;
        Some((service, sub))
    }

    pub fn to_payload(&self, catalog: &[Service]) -> Result<AppointmentPayload, PublicBookingError> {
        if self.name.trim().is_empty() {
            return Err(PublicBookingError::MissingName);
        }
        if self.phone.trim().is_empty() {
            return Err(PublicBookingError::MissingPhone);
        }
        if self.service_id.is_none() {
            return Err(PublicBookingError::MissingService);
        }
        let (service, sub) = self
            .chosen(catalog)
            .ok_or(PublicBookingError::MissingSubService)?;
        let date = self.date.ok_or(PublicBookingError::MissingDate)?;
        let note = self.note.trim();
        Ok(AppointmentPayload {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: None,
            gender: None,
            address: None,
            note: (!note.is_empty()).then(|| note.to_string()),
            services: vec![ServiceLinePayload {
                service_id: service.id.clone(),
                sub_service_id: sub.id.clone(),
                price: sub.price,
                duration: sub.duration.clone(),
            }],
            employee_id: None,
            date,
            amount: sub.price,
            payment_mode: None,
            payment_status: None,
            source: AppointmentSource::Online,
            confirmation_status: false,
            seen: Some(false),
        })
    }
}
