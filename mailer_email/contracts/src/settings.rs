use mailer_models::email_address::{EmailAddress, EmailRecipients};

use crate::SmtpRelay;

/// Resolves the SMTP settings for one invocation.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SmtpSettingsService: Send + Sync + 'static {
    /// Returns `Ok(None)` if the relay credentials are not configured.
    fn resolve(&self) -> anyhow::Result<Option<SmtpSettings>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub relay: SmtpRelay,
    pub from: EmailAddress,
    pub from_name: Option<String>,
    pub recipient: Option<EmailRecipients>,
}

#[cfg(feature = "mock")]
impl MockSmtpSettingsService {
    pub fn with_resolve(mut self, result: Option<SmtpSettings>) -> Self {
        self.expect_resolve()
            .once()
            .return_once(move || Ok(result));
        self
    }

    pub fn with_resolve_error(mut self) -> Self {
        self.expect_resolve()
            .once()
            .return_once(|| Err(anyhow::anyhow!("Invalid SMTP_PORT \"smtp\"")));
        self
    }
}
