use std::collections::BTreeMap;

/// The inputs of the recipient form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecipientField {
    Name,
    Street,
    Number,
    Complement,
    City,
    State,
    ZipCode,
}

impl RecipientField {
    pub const ALL: [RecipientField; 7] = [
        RecipientField::Name,
        RecipientField::Street,
        RecipientField::Number,
        RecipientField::Complement,
        RecipientField::City,
        RecipientField::State,
        RecipientField::ZipCode,
    ];

    /// Key used for the field in forms and JSON bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientField::Name => "name",
            RecipientField::Street => "street",
            RecipientField::Number => "number",
            RecipientField::Complement => "complement",
            RecipientField::City => "city",
            RecipientField::State => "state",
            RecipientField::ZipCode => "zip_code",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecipientField::Name => "Name",
            RecipientField::Street => "Street",
            RecipientField::Number => "Number",
            RecipientField::Complement => "Complement",
            RecipientField::City => "City",
            RecipientField::State => "State",
            RecipientField::ZipCode => "ZIP",
        }
    }
}

/// Validation messages keyed by the field they belong to.
///
/// A field holds at most one message, the first rule it failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<RecipientField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: RecipientField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: RecipientField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecipientField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
