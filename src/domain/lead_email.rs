use validator::validate_email;

#[derive(Debug, Clone)]
pub struct LeadEmail(String);

impl LeadEmail {
    pub fn parse(s: String) -> Result<LeadEmail, String> {
        let trimmed = s.trim();
        if validate_email(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(format!("{} is not a valid email address.", s))
        }
    }
}

impl std::fmt::Display for LeadEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for LeadEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
