use super::{
    client::ApiClient,
    types::{ApiError, ListEnvelope, Service},
};

impl ApiClient {
    pub async fn get_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_json::<ListEnvelope<Service>>("/services", "Failed to load services")
            .await
            .map(ListEnvelope::into_items)
    }

    pub async fn get_service(&self, id: &str) -> Result<Service, ApiError> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum ServiceEnvelope {
            Wrapped { service: Service },
            Bare(Service),
        }

        let envelope: ServiceEnvelope = self
            .get_json(&format!("/services/{}", id), "Failed to load service")
            .await?;
        Ok(match envelope {
            ServiceEnvelope::Wrapped { service } => service,
            ServiceEnvelope::Bare(service) => service,
        })
    }
}
