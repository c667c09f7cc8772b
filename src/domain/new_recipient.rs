use super::{
    FieldErrors, RecipientField, RecipientFormData, recipient_name::RecipientName,
    zip_code::ZipCode,
};

/// A recipient that passed validation and can be sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipient {
    pub name: RecipientName,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: ZipCode,
}

fn required(value: String, message: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(message.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

impl TryFrom<RecipientFormData> for NewRecipient {
    type Error = FieldErrors;

    /// Checks every field and reports all failures at once.
    fn try_from(value: RecipientFormData) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::new();

        let name = RecipientName::parse(value.name)
            .map_err(|e| errors.insert(RecipientField::Name, e))
            .ok();
        let street = required(value.street, "Street is required")
            .map_err(|e| errors.insert(RecipientField::Street, e))
            .ok();
        let number = required(value.number, "Number is required")
            .map_err(|e| errors.insert(RecipientField::Number, e))
            .ok();
        let city = required(value.city, "City is required")
            .map_err(|e| errors.insert(RecipientField::City, e))
            .ok();
        let state = required(value.state, "State is required")
            .map_err(|e| errors.insert(RecipientField::State, e))
            .ok();
        let zip_code = ZipCode::parse(value.zip_code)
            .map_err(|e| errors.insert(RecipientField::ZipCode, e))
            .ok();

        let complement = value.complement.trim();
        let complement = (!complement.is_empty()).then(|| complement.to_string());

        match (name, street, number, city, state, zip_code) {
            (Some(name), Some(street), Some(number), Some(city), Some(state), Some(zip_code))
                if errors.is_empty() =>
            {
                Ok(Self {
                    name,
                    street,
                    number,
                    complement,
                    city,
                    state,
                    zip_code,
                })
            }
            _ => Err(errors),
        }
    }
}
