pub const NAME_REQUIRED: &str = "Name is required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientName(String);

impl RecipientName {
    /// Trims `s` and checks something is left.
    pub fn parse(s: String) -> Result<RecipientName, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(NAME_REQUIRED.to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for RecipientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
