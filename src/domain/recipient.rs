use serde::Deserialize;
use serde_aux::field_attributes::deserialize_string_from_number;

use super::RecipientField;

/// A recipient as the API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipient {
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub id: String,
    pub name: String,
    pub street: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Raw values of the form inputs. Missing inputs are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecipientFormData {
    pub name: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl RecipientFormData {
    pub fn value(&self, field: RecipientField) -> &str {
        match field {
            RecipientField::Name => &self.name,
            RecipientField::Street => &self.street,
            RecipientField::Number => &self.number,
            RecipientField::Complement => &self.complement,
            RecipientField::City => &self.city,
            RecipientField::State => &self.state,
            RecipientField::ZipCode => &self.zip_code,
        }
    }
}

impl From<Recipient> for RecipientFormData {
    fn from(recipient: Recipient) -> Self {
        Self {
            name: recipient.name,
            street: recipient.street,
            number: recipient.number,
            complement: recipient.complement.unwrap_or_default(),
            city: recipient.city,
            state: recipient.state,
            zip_code: recipient.zip_code,
        }
    }
}
