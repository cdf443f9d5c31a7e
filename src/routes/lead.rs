use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use tracing::field::display;
use tracing::Span;

use crate::analytics::AnalyticsClient;
use crate::domain::{LeadFormData, LeadSubmission};
use crate::relay_client::RelayClient;
use crate::startup::RelayPolicy;
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum LeadError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Lead could not be delivered")]
    DeliveryFailed(#[source] anyhow::Error),
}

impl std::fmt::Debug for LeadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for LeadError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeadError::MissingFields => StatusCode::BAD_REQUEST,
            LeadError::DeliveryFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            LeadError::MissingFields => serde_json::json!({ "message": self.to_string() }),
            LeadError::DeliveryFailed(_) => {
                serde_json::json!({ "message": self.to_string(), "success": false })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[tracing::instrument(
    name = "Relay a lead from the site",
    skip(body, relay_client, analytics, policy),
    fields(form_type = tracing::field::Empty)
)]
pub async fn relay_lead(
    body: web::Json<LeadFormData>,
    relay_client: web::Data<RelayClient>,
    analytics: web::Data<Option<AnalyticsClient>>,
    policy: web::Data<RelayPolicy>,
) -> Result<HttpResponse, LeadError> {
    let data = body.into_inner();
    if data.missing_required_fields() {
        return Err(LeadError::MissingFields);
    }

    if let Err(e) = forward_lead(data, &relay_client, analytics.get_ref().as_ref()).await {
        if policy.surface_failures {
            return Err(LeadError::DeliveryFailed(e));
        }
        // The visitor is told the lead went through; operators follow up from the logs.
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Lead was not delivered to the relay. Reporting success to the visitor",
        );
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Form submitted successfully",
        "success": true
    })))
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({ "message": "Method not allowed" }))
}

async fn forward_lead(
    data: LeadFormData,
    relay_client: &RelayClient,
    analytics: Option<&AnalyticsClient>,
) -> Result<(), anyhow::Error> {
    let submission = LeadSubmission::try_from(data)
        .map_err(anyhow::Error::msg)
        .context("Lead failed validation")?;
    Span::current().record("form_type", &display(submission.tag));

    relay_client
        .submit_lead(&submission)
        .await
        .context("Failed to relay the lead to the form service")?;

    if let Some(analytics) = analytics {
        analytics.notify_lead(submission.tag);
    }
    Ok(())
}
