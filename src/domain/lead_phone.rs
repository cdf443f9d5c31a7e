const MAX_LENGTH: usize = 32;
const MIN_DIGITS: usize = 7;
const ALLOWED_PUNCTUATION: [char; 6] = [' ', '+', '-', '(', ')', '.'];

#[derive(Debug, Clone)]
pub struct LeadPhone(String);

impl LeadPhone {
    pub fn parse(s: String) -> Result<LeadPhone, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Phone number is required.".to_string());
        }
        if trimmed.chars().count() > MAX_LENGTH {
            return Err(format!("{} is too long to be a phone number.", s));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || ALLOWED_PUNCTUATION.contains(&c))
        {
            return Err(format!("{} contains characters not allowed in a phone number.", s));
        }
        if trimmed.chars().filter(char::is_ascii_digit).count() < MIN_DIGITS {
            return Err(format!("{} has too few digits to be a phone number.", s));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for LeadPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
