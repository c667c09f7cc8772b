use std::fmt;

/// Identifier of a recipient as it appears in `/recipients/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientId(String);

impl RecipientId {
    pub fn parse(s: String) -> Result<RecipientId, String> {
        let is_empty = s.is_empty();
        let has_forbidden_characters = s
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'));

        if is_empty || has_forbidden_characters {
            Err(format!("{:?} is not a valid recipient id.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for RecipientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
