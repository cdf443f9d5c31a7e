/// Identifies which on-page form produced a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormTag {
    #[default]
    Contact,
    Tour,
}

impl FormTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormTag::Contact => "contact",
            FormTag::Tour => "tour",
        }
    }

    /// An absent or blank tag falls back to `contact`.
    pub fn parse(s: Option<&str>) -> Result<FormTag, String> {
        match s.map(str::trim) {
            None | Some("") => Ok(FormTag::default()),
            Some(tag) => match tag.to_lowercase().as_str() {
                "contact" => Ok(FormTag::Contact),
                "tour" => Ok(FormTag::Tour),
                _ => Err(format!("{} is not a known form type.", tag)),
            },
        }
    }
}

impl std::fmt::Display for FormTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
