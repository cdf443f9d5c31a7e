pub const SUCCESS_MESSAGE: &str = "Thank you! We'll be in touch soon.";
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again or call us directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Success,
    Error,
}

/// Outcome of the latest submission attempt, as shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionStatus {
    state: SubmissionState,
    message: String,
}

impl SubmissionStatus {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn success() -> Self {
        Self {
            state: SubmissionState::Success,
            message: SUCCESS_MESSAGE.to_owned(),
        }
    }

    pub fn error() -> Self {
        Self {
            state: SubmissionState::Error,
            message: ERROR_MESSAGE.to_owned(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
