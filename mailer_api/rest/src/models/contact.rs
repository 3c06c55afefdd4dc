use mailer_models::contact::{
    ContactSubmission, ContactSubmissionEmail, ContactSubmissionMessage, ContactSubmissionName,
};
use serde::Deserialize;

/// Body of a contact form `POST`. Optional fields may be absent or `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    /// Name of the sender
    pub name: ContactSubmissionName,
    /// Email of the sender, not checked for a valid format
    pub email: ContactSubmissionEmail,
    /// Phone number of the sender
    #[serde(default)]
    pub phone: Option<String>,
    /// Subject of the message
    #[serde(default)]
    pub subject: Option<String>,
    /// Content of the message
    pub message: ContactSubmissionMessage,
    /// Page the form was submitted from
    #[serde(default)]
    pub page: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone.unwrap_or_default(),
            subject: value
                .subject
                .unwrap_or_else(|| ContactSubmission::DEFAULT_SUBJECT.into()),
            message: value.message,
            page: value.page.unwrap_or_default(),
        }
    }
}
