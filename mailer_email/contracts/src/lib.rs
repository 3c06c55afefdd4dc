use std::future::Future;

use mailer_models::{
    email_address::{EmailAddress, EmailAddressWithName, EmailRecipients},
    Sensitive,
};

pub mod settings;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Send the email through the given relay.
    ///
    /// Returns `false` if the relay answered with a non-positive response.
    fn send(
        &self,
        relay: SmtpRelay,
        email: Email,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Check that the relay accepts connections.
    fn ping(&self, relay: SmtpRelay) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: EmailAddressWithName,
    pub recipient: EmailRecipients,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub reply_to: Option<EmailAddress>,
}

/// Connection parameters of an authenticated SMTP relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpRelay {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Sensitive<String>,
}

impl SmtpRelay {
    pub const SMTPS_PORT: u16 = 465;

    /// Whether the relay expects implicit TLS from the first byte.
    pub fn secure(&self) -> bool {
        self.port == Self::SMTPS_PORT
    }
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, relay: SmtpRelay, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(
                mockall::predicate::eq(relay),
                mockall::predicate::eq(email),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    /// Fail the send with a transport error, whatever email is passed.
    pub fn with_send_error(mut self, relay: SmtpRelay) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(relay), mockall::predicate::always())
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "connection refused"
                ))))
            });
        self
    }
}
