// Google Cloud Pub/Sub publisher over the REST API.
//
// Purpose
// - Deliver notifications to the `topics.publish` endpoint, either on Google Cloud or on a
//   local emulator (PUBSUB_EMULATOR_HOST).

use crate::shared::infrastructure::event_bus::{EventBusError, EventPublisher, NotificationMessage};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

const PUBSUB_BASE_URL: &str = "https://pubsub.googleapis.com";

#[derive(Debug, Clone)]
pub struct PubSubSettings {
    pub project_id: String,
    pub topic_id: String,
    pub access_token: Option<SecretString>,
    pub emulator_host: Option<String>,
    pub request_timeout: Duration,
}

impl PubSubSettings {
    pub fn publish_url(&self) -> String {
        let base = match &self.emulator_host {
            Some(host) if host.starts_with("http://") || host.starts_with("https://") => {
                host.trim_end_matches('/').to_string()
            }
            Some(host) => format!("http://{host}"),
            None => PUBSUB_BASE_URL.to_string(),
        };
        format!(
            "{base}/v1/projects/{}/topics/{}:publish",
            self.project_id, self.topic_id
        )
    }
}

#[derive(Serialize)]
struct PubSubMessage<'a> {
    data: String,
    attributes: BTreeMap<&'static str, &'a str>,
}

#[derive(Serialize)]
struct PublishRequest<'a> {
    messages: Vec<PubSubMessage<'a>>,
}

fn encode_message(message: &NotificationMessage) -> Result<PublishRequest<'_>, EventBusError> {
    let json =
        serde_json::to_vec(message).map_err(|e| EventBusError::Serialization(e.to_string()))?;
    let mut attributes = BTreeMap::new();
    attributes.insert("event_type", message.event_type.as_str());
    Ok(PublishRequest {
        messages: vec![PubSubMessage {
            data: STANDARD.encode(json),
            attributes,
        }],
    })
}

pub struct PubSubEventPublisher {
    client: Client,
    publish_url: String,
    access_token: Option<SecretString>,
}

impl PubSubEventPublisher {
    pub fn new(settings: &PubSubSettings) -> Result<Self, EventBusError> {
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| EventBusError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            publish_url: settings.publish_url(),
            access_token: settings.access_token.clone(),
        })
    }
}

#[async_trait::async_trait]
impl EventPublisher for PubSubEventPublisher {
    async fn publish(&self, message: &NotificationMessage) -> Result<(), EventBusError> {
        let body = encode_message(message)?;
        let mut request = self.client.post(&self.publish_url).json(&body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| EventBusError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(EventBusError::Rejected {
                status: response.status().as_u16(),
            });
        }
        tracing::debug!(event_type = %message.event_type, "published notification");
        Ok(())
    }
}
