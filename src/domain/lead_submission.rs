use super::{FormTag, LeadEmail, LeadMessage, LeadName, LeadPhone};

/// Raw field values as they arrive from a lead form.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: Option<String>,
    pub form_type: Option<String>,
}

impl LeadFormData {
    /// True when any of the fields a browser would mark `required` is blank.
    pub fn missing_required_fields(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email, &self.phone]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct LeadSubmission {
    pub first_name: LeadName,
    pub last_name: LeadName,
    pub email: LeadEmail,
    pub phone: LeadPhone,
    pub message: LeadMessage,
    pub tag: FormTag,
}

impl LeadSubmission {
    pub fn subject(&self) -> String {
        format!(
            "New {} Request from {} {}",
            self.tag, self.first_name, self.last_name
        )
    }
}

impl TryFrom<LeadFormData> for LeadSubmission {
    type Error = String;

    fn try_from(value: LeadFormData) -> Result<Self, Self::Error> {
        let first_name = LeadName::parse(value.first_name)?;
        let last_name = LeadName::parse(value.last_name)?;
        let email = LeadEmail::parse(value.email)?;
        let phone = LeadPhone::parse(value.phone)?;
        let message = LeadMessage::parse(value.message)?;
        let tag = FormTag::parse(value.form_type.as_deref())?;
        Ok(Self {
            first_name,
            last_name,
            email,
            phone,
            message,
            tag,
        })
    }
}
