mod health_check;
mod recipient_form;

pub use health_check::*;
pub use recipient_form::*;
