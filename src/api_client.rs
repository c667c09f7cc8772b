use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::domain::{NewRecipient, Recipient, RecipientId};

/// HTTP client for the recipients REST API.
#[derive(Clone, Debug)]
pub struct RecipientsClient {
    http_client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct RecipientRequest<'a> {
    name: &'a str,
    street: &'a str,
    number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    complement: Option<&'a str>,
    city: &'a str,
    state: &'a str,
    zip_code: &'a str,
}

impl<'a> From<&'a NewRecipient> for RecipientRequest<'a> {
    fn from(recipient: &'a NewRecipient) -> Self {
        Self {
            name: recipient.name.as_ref(),
            street: &recipient.street,
            number: &recipient.number,
            complement: recipient.complement.as_deref(),
            city: &recipient.city,
            state: &recipient.state,
            zip_code: recipient.zip_code.as_ref(),
        }
    }
}

impl RecipientsClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn recipients_url(&self) -> String {
        format!("{}/recipients", self.base_url)
    }

    fn recipient_url(&self, id: &RecipientId) -> String {
        format!("{}/recipients/{}", self.base_url, id)
    }

    #[tracing::instrument(name = "Fetching recipient from the API", skip(self))]
    pub async fn get_recipient(&self, id: &RecipientId) -> Result<Recipient, reqwest::Error> {
        self.http_client
            .get(self.recipient_url(id))
            .send()
            .await?
            .error_for_status()?
            .json::<Recipient>()
            .await
    }

    #[tracing::instrument(name = "Creating recipient through the API", skip(self, recipient))]
    pub async fn create_recipient(&self, recipient: &NewRecipient) -> Result<(), reqwest::Error> {
        self.http_client
            .post(self.recipients_url())
            .json(&RecipientRequest::from(recipient))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    #[tracing::instrument(name = "Updating recipient through the API", skip(self, recipient))]
    pub async fn update_recipient(
        &self,
        id: &RecipientId,
        recipient: &NewRecipient,
    ) -> Result<(), reqwest::Error> {
        self.http_client
            .put(self.recipient_url(id))
            .json(&RecipientRequest::from(recipient))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
