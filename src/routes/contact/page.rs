use actix_web::{http::header::ContentType, HttpResponse};
use htmlescape::encode_minimal;

use crate::domain::FormTag;
use crate::lead_form::{LeadField, LeadForm};

fn heading(tag: FormTag) -> &'static str {
    match tag {
        FormTag::Contact => "Contact Us",
        FormTag::Tour => "Schedule Your Private Tour",
    }
}

/// Render the lead form for `form`, keeping whatever values it still holds.
pub fn contact_page(form: &LeadForm, base_url: &str, notice_html: &str) -> HttpResponse {
    let title = heading(form.tag());
    let tag = form.tag().as_str();
    let first_name = encode_minimal(form.field(LeadField::FirstName));
    let last_name = encode_minimal(form.field(LeadField::LastName));
    let email = encode_minimal(form.field(LeadField::Email));
    let phone = encode_minimal(form.field(LeadField::Phone));
    let message = encode_minimal(form.field(LeadField::Message));
    let (disabled, button_label) = if form.is_submitting() {
        (" disabled", "Sending...")
    } else {
        ("", "Send Message")
    };

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta http-equiv="content-type" content="text/html; charset=utf-8">
                    <link rel="canonical" href="{base_url}/contact?formType={tag}">
                    <title>{title}</title>
                </head>
                <body>
                    <h3>{title}</h3>
                    {notice_html}
                    <form action="/contact" method="post">
                        <input type="hidden" name="formType" value="{tag}">
                        <input type="text" name="firstName" placeholder="First Name" value="{first_name}" required>
                        <input type="text" name="lastName" placeholder="Last Name" value="{last_name}" required>
                        <input type="email" name="email" placeholder="Email Address" value="{email}" required>
                        <input type="tel" name="phone" placeholder="Phone Number" value="{phone}" required>
                        <textarea name="message" placeholder="Tell us about your collection and interests" rows="4">{message}</textarea>
                        <button type="submit"{disabled}>{button_label}</button>
                    </form>
                </body>
            </html>"#,
        ))
}
