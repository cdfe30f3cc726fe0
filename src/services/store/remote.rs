//! reqwest-backed implementation of [`EventStore`] against the Workdesk
//! data service.

use async_trait::async_trait;
use reqwest::Client;

use super::records::{EventPatch, EventRecord, NewEventRecord};
use super::{EventStore, StoreError};
use crate::models::settings::Settings;

pub struct RemoteEventStore {
    client: Client,
    base_url: String,
}

impl RemoteEventStore {
    pub fn new(settings: &Settings) -> Result<Self, StoreError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: settings.service_url.trim_end_matches('/').to_string(),
        })
    }

    fn events_url(&self) -> String {
        format!("{}/api/events", self.base_url)
    }

    fn event_url(&self, id: i64) -> String {
        format!("{}/api/events/{}", self.base_url, id)
    }

    fn user_events_url(&self, user_id: &str) -> String {
        format!(
            "{}/api/users/{}/events",
            self.base_url,
            urlencoding::encode(user_id)
        )
    }

    /// Decode a JSON body, distinguishing transport failures from malformed
    /// payloads.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn check_status(response: &reqwest::Response) -> Result<(), StoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl EventStore for RemoteEventStore {
    async fn fetch_events(&self, user_id: &str) -> Result<Vec<EventRecord>, StoreError> {
        log::debug!("fetching events for user {user_id}");
        let response = self
            .client
            .get(self.user_events_url(user_id))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create_event(&self, record: NewEventRecord) -> Result<EventRecord, StoreError> {
        log::debug!("creating event '{}'", record.title);
        let response = self
            .client
            .post(self.events_url())
            .json(&record)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_event(&self, id: i64, patch: EventPatch) -> Result<EventRecord, StoreError> {
        log::debug!("updating event {id}");
        let response = self
            .client
            .patch(self.event_url(id))
            .json(&patch)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_event(&self, id: i64) -> Result<(), StoreError> {
        log::debug!("deleting event {id}");
        let response = self.client.delete(self.event_url(id)).send().await?;
        Self::check_status(&response)
    }
}
