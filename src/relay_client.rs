use std::time::Duration;

use reqwest::{Client, Url};

use crate::domain::LeadSubmission;

/// Client for the third-party form relay that routes leads to the sales inbox.
pub struct RelayClient {
    http_client: Client,
    endpoint: Url,
}

impl RelayClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[tracing::instrument(
        name = "Relay a lead submission",
        skip(self, submission),
        fields(form_type = %submission.tag)
    )]
    pub async fn submit_lead(&self, submission: &LeadSubmission) -> Result<(), reqwest::Error> {
        let subject = submission.subject();
        let request_body = RelayRequest {
            first_name: submission.first_name.as_ref(),
            last_name: submission.last_name.as_ref(),
            email: submission.email.as_ref(),
            phone: submission.phone.as_ref(),
            message: submission.message.as_ref(),
            form_type: submission.tag.as_str(),
            subject: &subject,
        };
        self.http_client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
    form_type: &'a str,
    #[serde(rename = "_subject")]
    subject: &'a str,
}
