const MAX_LENGTH: usize = 5000;

/// Free-text message attached to a lead. Empty is a valid message.
#[derive(Debug, Clone, Default)]
pub struct LeadMessage(String);

impl LeadMessage {
    pub fn parse(s: Option<String>) -> Result<LeadMessage, String> {
        let s = s.unwrap_or_default();
        if s.chars().count() > MAX_LENGTH {
            return Err(format!(
                "Message is longer than {} characters.",
                MAX_LENGTH
            ));
        }
        Ok(Self(s.trim().to_owned()))
    }
}

impl AsRef<str> for LeadMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
