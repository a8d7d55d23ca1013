use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::types::{ApiError, MessageResponse},
    config,
    router::LOGIN_PATH,
    state::session::SessionStore,
    utils::storage::navigate_to,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: SessionStore::browser(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
            session: SessionStore::browser(),
        }
    }

    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("session rejected by the server, signing out");
            self.session.clear();
            navigate_to(LOGIN_PATH);
        }
    }

    /// Sends `builder` and maps transport failures and non-2xx statuses to [`ApiError`].
    async fn dispatch(&self, builder: RequestBuilder, fallback: &str) -> Result<Response, ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            let error = ApiError::from_response(status.as_u16(), &body, fallback);
            log::warn!("request failed with {}: {}", status, error.error);
            Err(error)
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    /// Write endpoints may answer with `{ message }`, another object, or nothing at all.
    async fn parse_message(response: Response) -> MessageResponse {
        let body = response.text().await.unwrap_or_default();
        serde_json::from_str(&body).unwrap_or_default()
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let response = self.dispatch(self.client.get(url), fallback).await?;
        Self::parse(response).await
    }

    pub(super) async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path).await;
        let response = self
            .dispatch(self.client.post(url).json(body), fallback)
            .await?;
        Self::parse(response).await
    }

    pub(super) async fn post_for_message<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.url(path).await;
        let response = self
            .dispatch(self.client.post(url).json(body), fallback)
            .await?;
        Ok(Self::parse_message(response).await)
    }

    pub(super) async fn put_for_message<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.url(path).await;
        let response = self
            .dispatch(self.client.put(url).json(body), fallback)
            .await?;
        Ok(Self::parse_message(response).await)
    }

    pub(super) async fn delete_for_message(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.url(path).await;
        let response = self.dispatch(self.client.delete(url), fallback).await?;
        Ok(Self::parse_message(response).await)
    }
}
