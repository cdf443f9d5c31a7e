mod contact_get;
mod contact_post;
mod page;

pub use contact_get::contact_form;
pub use contact_post::submit_contact_form;
