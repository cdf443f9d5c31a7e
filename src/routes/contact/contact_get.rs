use actix_web::{web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use std::fmt::Write as _;

use super::page::contact_page;
use crate::domain::FormTag;
use crate::lead_form::LeadForm;
use crate::startup::ApplicationBaseUrl;
use crate::utils::e400;

#[derive(serde::Deserialize)]
pub struct ContactQuery {
    #[serde(rename = "formType")]
    form_type: Option<String>,
}

pub async fn contact_form(
    query: web::Query<ContactQuery>,
    flash_messages: IncomingFlashMessages,
    base_url: web::Data<ApplicationBaseUrl>,
) -> Result<HttpResponse, actix_web::Error> {
    let tag = FormTag::parse(query.form_type.as_deref()).map_err(e400)?;

    let mut msg_html = String::new();
    for m in flash_messages.iter() {
        writeln!(msg_html, "<p><i>{}</i></p>", m.content()).unwrap();
    }

    Ok(contact_page(&LeadForm::new(tag), &base_url.0, &msg_html))
}
