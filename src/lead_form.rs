//! Per-form lead submission flow.
//!
//! A [`LeadForm`] owns the values a visitor typed, the classification tag of
//! the form they used, and the status shown after the latest attempt.
//! Submitting moves it through `idle -> submitting -> success | error`;
//! success and error are rest states and any of them accepts a new submit.

use crate::analytics::AnalyticsClient;
use crate::domain::{FormTag, LeadFormData, LeadSubmission};
use crate::relay_client::RelayClient;
use crate::submission_status::SubmissionStatus;
use crate::utils::error_chain_fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("A submission from this form is already in flight")]
    AlreadySubmitting,
    #[error("{0}")]
    Validation(String),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Debug, Clone)]
pub struct LeadForm {
    tag: FormTag,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    message: String,
    submitting: bool,
    status: SubmissionStatus,
}

impl LeadForm {
    pub fn new(tag: FormTag) -> Self {
        Self {
            tag,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            submitting: false,
            status: SubmissionStatus::idle(),
        }
    }

    /// Rebuild a form from values posted by a browser. The posted
    /// `formType` is ignored; the caller decides which form this is.
    pub fn with_values(tag: FormTag, data: LeadFormData) -> Self {
        Self {
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            message: data.message.unwrap_or_default(),
            ..Self::new(tag)
        }
    }

    pub fn tag(&self) -> FormTag {
        self.tag
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn field(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LeadField::FirstName => self.first_name = value,
            LeadField::LastName => self.last_name = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
            LeadField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.message,
        ]
        .iter()
        .all(|v| v.is_empty())
    }

    fn form_data(&self) -> LeadFormData {
        LeadFormData {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: Some(self.message.clone()),
            form_type: Some(self.tag.as_str().to_owned()),
        }
    }

    /// Synchronous half of a submit event.
    ///
    /// Invalid fields stop the attempt before anything changes. Otherwise the
    /// status goes back to idle, the form is marked as submitting and the
    /// submission to relay is returned.
    pub fn begin_submission(&mut self) -> Result<LeadSubmission, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        let submission =
            LeadSubmission::try_from(self.form_data()).map_err(SubmitError::Validation)?;
        self.status = SubmissionStatus::idle();
        self.submitting = true;
        Ok(submission)
    }

    /// Apply the outcome of the relay call. Fields survive a failure so the
    /// visitor does not have to type them again.
    pub fn finish_submission<E>(&mut self, outcome: Result<(), E>)
    where
        E: std::fmt::Debug + std::fmt::Display,
    {
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::success();
                self.clear_fields();
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    form_type = %self.tag,
                    "Failed to relay a lead submission"
                );
                self.status = SubmissionStatus::error();
            }
        }
        self.submitting = false;
    }

    #[tracing::instrument(
        name = "Submit a lead form",
        skip(self, relay_client, analytics),
        fields(form_type = %self.tag)
    )]
    pub async fn submit(
        &mut self,
        relay_client: &RelayClient,
        analytics: Option<&AnalyticsClient>,
    ) -> Result<&SubmissionStatus, SubmitError> {
        let submission = self.begin_submission()?;
        let outcome = relay_client.submit_lead(&submission).await;
        let delivered = outcome.is_ok();
        self.finish_submission(outcome);
        if delivered {
            if let Some(analytics) = analytics {
                analytics.notify_lead(submission.tag);
            }
        }
        Ok(&self.status)
    }

    fn clear_fields(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
    }
}
