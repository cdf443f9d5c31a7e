use unicode_segmentation::UnicodeSegmentation;

const MAX_GRAPHEMES: usize = 256;
const FORBIDDEN_CHARACTERS: [char; 9] = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];

/// A first or last name as typed into a lead form.
#[derive(Debug, Clone)]
pub struct LeadName(String);

impl LeadName {
    pub fn parse(s: String) -> Result<LeadName, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Name is required.".to_string());
        }
        if trimmed.graphemes(true).count() > MAX_GRAPHEMES {
            return Err(format!("{} is too long to be a valid name.", s));
        }
        if trimmed.chars().any(|c| FORBIDDEN_CHARACTERS.contains(&c)) {
            return Err(format!("{} contains forbidden characters.", s));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl std::fmt::Display for LeadName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for LeadName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
