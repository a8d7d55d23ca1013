use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use super::form::ServiceLine;
use crate::api::{
    ApiClient, ApiError, Appointment, AppointmentPayload, Employee, MessageResponse, Service,
};

/// Catalog and roster for the booking selects. Each list loads on its own; a
/// failed fetch leaves that list empty and is reported in `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingLookups {
    pub services: Vec<Service>,
    pub employees: Vec<Employee>,
    pub error: Option<ApiError>,
}

impl BookingLookups {
    fn record<T>(&mut self, what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
        match result {
            Ok(items) => items,
            Err(err) => {
                log::warn!("{} fetch failed: {}", what, err);
                self.error.get_or_insert(err);
                Vec::new()
            }
        }
    }
}

#[derive(Clone)]
pub struct BookingsRepository {
    client: Rc<ApiClient>,
}

impl BookingsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Catalog and roster, fetched concurrently and independently.
    pub async fn fetch_lookups(&self) -> BookingLookups {
        let (services, employees) =
            futures::join!(self.client.get_services(), self.client.get_employees());
        let mut lookups = BookingLookups::default();
        lookups.services = lookups.record("service catalog", services);
        lookups.employees = lookups.record("employee roster", employees);
        lookups
    }

    pub async fn fetch_list(&self) -> Result<(Vec<Appointment>, BookingLookups), ApiError> {
        let (appointments, lookups) =
            futures::join!(self.client.get_appointments(), self.fetch_lookups());
        Ok((appointments?, lookups))
    }

    pub async fn fetch_unconfirmed(&self) -> Result<Vec<Appointment>, ApiError> {
        self.client.get_unconfirmed_appointments().await
    }

    pub async fn create(&self, payload: AppointmentPayload) -> Result<MessageResponse, ApiError> {
        self.client.create_appointment(&payload).await
    }

    pub async fn update(
        &self,
        id: String,
        payload: AppointmentPayload,
    ) -> Result<MessageResponse, ApiError> {
        self.client.update_appointment(&id, &payload).await
    }

    pub async fn approve(&self, id: String) -> Result<MessageResponse, ApiError> {
        self.client.approve_appointment(&id).await
    }

    /// Re-resolves each saved line's service concurrently; a failed lookup
    /// yields a line without options.
    pub async fn resolve_lines(&self, appointment: &Appointment) -> Vec<ServiceLine> {
        let lookups = appointment.services.iter().map(|saved| async move {
            let service = match saved.service_id.as_ref() {
                Some(reference) => match self.client.get_service(&reference.id).await {
                    Ok(service) => Some(service),
                    Err(err) => {
                        log::warn!("service {} lookup failed: {}", reference.id, err);
                        None
                    }
                },
                None => None,
            };
            ServiceLine::from_saved(saved, service.as_ref())
        });
        join_all(lookups).await
    }
}
