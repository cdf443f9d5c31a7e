mod form_tag;
mod lead_email;
mod lead_message;
mod lead_name;
mod lead_phone;
mod lead_submission;

pub use form_tag::FormTag;
pub use lead_email::LeadEmail;
pub use lead_message::LeadMessage;
pub use lead_name::LeadName;
pub use lead_phone::LeadPhone;
pub use lead_submission::{LeadFormData, LeadSubmission};
