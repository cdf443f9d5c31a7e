use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;

use super::page::contact_page;
use crate::analytics::AnalyticsClient;
use crate::domain::{FormTag, LeadFormData};
use crate::lead_form::{LeadForm, SubmitError};
use crate::relay_client::RelayClient;
use crate::startup::ApplicationBaseUrl;
use crate::submission_status::SubmissionState;
use crate::utils::{e400, e500, see_other};

#[tracing::instrument(
    name = "Submit the contact form",
    skip(form, relay_client, analytics, base_url),
    fields(form_type = tracing::field::Empty)
)]
pub async fn submit_contact_form(
    form: web::Form<LeadFormData>,
    relay_client: web::Data<RelayClient>,
    analytics: web::Data<Option<AnalyticsClient>>,
    base_url: web::Data<ApplicationBaseUrl>,
) -> Result<HttpResponse, actix_web::Error> {
    let data = form.into_inner();
    let tag = FormTag::parse(data.form_type.as_deref()).map_err(e400)?;
    tracing::Span::current().record("form_type", &tracing::field::display(tag));

    let mut lead_form = LeadForm::with_values(tag, data);
    let outcome = lead_form
        .submit(&relay_client, analytics.get_ref().as_ref())
        .await
        .map(|status| status.state());

    match outcome {
        Ok(SubmissionState::Success) => {
            FlashMessage::info(lead_form.status().message()).send();
            Ok(see_other(&format!("/contact?formType={}", tag)))
        }
        Ok(_) => {
            let notice = format!("<p><i>{}</i></p>", lead_form.status().message());
            Ok(contact_page(&lead_form, &base_url.0, &notice))
        }
        Err(SubmitError::Validation(e)) => {
            let notice = format!("<p><i>{}</i></p>", htmlescape::encode_minimal(&e));
            Ok(contact_page(&lead_form, &base_url.0, &notice))
        }
        Err(e) => Err(e500(e)),
    }
}
