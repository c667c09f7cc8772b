use crate::{
    api_client::RecipientsClient,
    domain::{FieldErrors, NewRecipient, RecipientFormData, RecipientId},
    navigation::{Navigator, RECIPIENT_LIST_ROUTE},
    notification::Notifier,
};

pub const RECIPIENT_CREATED: &str = "Recipient created successfully!";
pub const RECIPIENT_UPDATED: &str = "Recipient updated successfully!";
pub const RECIPIENT_NOT_SAVED: &str = "Could not save recipient, please try again.";
pub const RECIPIENT_NOT_LOADED: &str = "Could not load recipient.";

/// Decided once, from the route, when the form is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecipientId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated,
    /// Validation failed, see [`RecipientForm::errors`].
    Rejected,
}

#[derive(thiserror::Error, Debug)]
pub enum FormError {
    #[error("couldn't load recipient {id}, reqwest error {source}")]
    Load {
        id: RecipientId,
        #[source]
        source: reqwest::Error,
    },
    #[error("couldn't save recipient, reqwest error {0}")]
    Save(#[source] reqwest::Error),
}

/// Controller behind the recipient register page.
#[derive(Debug)]
pub struct RecipientForm {
    mode: FormMode,
    data: RecipientFormData,
    errors: FieldErrors,
}

impl RecipientForm {
    pub fn new(id: Option<RecipientId>) -> Self {
        let mode = match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        };
        Self {
            mode,
            data: RecipientFormData::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn data(&self) -> &RecipientFormData {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_data(&mut self, data: RecipientFormData) {
        self.data = data;
    }

    pub fn reset(&mut self) {
        self.data = RecipientFormData::default();
        self.errors.clear();
    }

    /// Fills the inputs with the stored recipient when editing.
    #[tracing::instrument(name = "Loading recipient form", skip(self, client), fields(mode = ?self.mode))]
    pub async fn load(&mut self, client: &RecipientsClient) -> Result<(), FormError> {
        let FormMode::Edit(id) = &self.mode else {
            return Ok(());
        };

        let recipient = client
            .get_recipient(id)
            .await
            .map_err(|source| FormError::Load {
                id: id.clone(),
                source,
            })?;
        self.data = recipient.into();
        Ok(())
    }

    /// Validates `data` and saves it through the API.
    ///
    /// On success the inputs are reset; an update also sends the user back
    /// to the recipient list. On failure the submitted values stay in place.
    #[tracing::instrument(
        name = "Submitting recipient form",
        skip(self, data, client, navigator, notifier),
        fields(mode = ?self.mode)
    )]
    pub async fn submit(
        &mut self,
        data: RecipientFormData,
        client: &RecipientsClient,
        navigator: &mut impl Navigator,
        notifier: &mut impl Notifier,
    ) -> Result<SubmitOutcome, FormError> {
        self.errors.clear();
        self.data = data;

        let new_recipient = match NewRecipient::try_from(self.data.clone()) {
            Ok(new_recipient) => new_recipient,
            Err(errors) => {
                tracing::info!(invalid_fields = errors.len(), "Recipient form rejected");
                self.errors = errors;
                return Ok(SubmitOutcome::Rejected);
            }
        };

        let saved = match &self.mode {
            FormMode::Edit(id) => client
                .update_recipient(id, &new_recipient)
                .await
                .map(|_| SubmitOutcome::Updated),
            FormMode::Create => client
                .create_recipient(&new_recipient)
                .await
                .map(|_| SubmitOutcome::Created),
        };

        let outcome = match saved {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("{}", e);
                notifier.error(RECIPIENT_NOT_SAVED);
                return Err(FormError::Save(e));
            }
        };

        if outcome == SubmitOutcome::Updated {
            notifier.success(RECIPIENT_UPDATED);
            navigator.push(RECIPIENT_LIST_ROUTE);
        } else {
            notifier.success(RECIPIENT_CREATED);
        }

        self.reset();
        Ok(outcome)
    }
}
