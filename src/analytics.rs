use std::time::Duration;

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use uuid::Uuid;

use crate::domain::FormTag;

const LEAD_EVENT_NAME: &str = "generate_lead";

/// Measurement-protocol client used to report that a lead was captured.
#[derive(Clone)]
pub struct AnalyticsClient {
    http_client: Client,
    endpoint: Url,
    measurement_id: String,
    api_secret: Secret<String>,
}

impl AnalyticsClient {
    pub fn new(
        endpoint: Url,
        measurement_id: String,
        api_secret: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint,
            measurement_id,
            api_secret,
        })
    }

    #[tracing::instrument(name = "Track a lead event", skip(self))]
    pub async fn track_lead(&self, tag: FormTag) -> Result<(), reqwest::Error> {
        let client_id = Uuid::new_v4().to_string();
        let body = EventBatch {
            client_id: &client_id,
            events: [Event {
                name: LEAD_EVENT_NAME,
                params: EventParams { form_type: tag },
            }],
        };
        self.http_client
            .post(self.endpoint.clone())
            .query(&[
                ("measurement_id", self.measurement_id.as_str()),
                ("api_secret", self.api_secret.expose_secret().as_str()),
            ])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Fire-and-forget: the event is sent on a detached task and failures are
    /// only logged.
    pub fn notify_lead(&self, tag: FormTag) {
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(e) = client.track_lead(tag).await {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    form_type = %tag,
                    "Failed to report a lead event to analytics"
                );
            }
        });
    }
}

#[derive(serde::Serialize)]
struct EventBatch<'a> {
    client_id: &'a str,
    events: [Event; 1],
}

#[derive(serde::Serialize)]
struct Event {
    name: &'static str,
    params: EventParams,
}

#[derive(serde::Serialize)]
struct EventParams {
    form_type: FormTag,
}
