mod new_recipient;
mod recipient;
mod recipient_field;
mod recipient_id;
mod recipient_name;
mod zip_code;

pub use new_recipient::NewRecipient;
pub use recipient::{Recipient, RecipientFormData};
pub use recipient_field::{FieldErrors, RecipientField};
pub use recipient_id::RecipientId;
pub use recipient_name::RecipientName;
pub use zip_code::ZipCode;
