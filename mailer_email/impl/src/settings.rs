use anyhow::Context;
use mailer_config::smtp::SmtpEnvironment;
use mailer_email_contracts::{
    settings::{SmtpSettings, SmtpSettingsService},
    SmtpRelay,
};
use mailer_models::email_address::{EmailAddress, EmailRecipients};

/// Reads the SMTP settings from the process environment on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSmtpSettingsService;

impl SmtpSettingsService for EnvSmtpSettingsService {
    fn resolve(&self) -> anyhow::Result<Option<SmtpSettings>> {
        resolve(&SmtpEnvironment::load()?)
    }
}

/// Turn the raw environment into typed settings.
///
/// Missing credentials take precedence over any other problem with the
/// environment, so they are checked first.
pub fn resolve(env: &SmtpEnvironment) -> anyhow::Result<Option<SmtpSettings>> {
    let Some((user, password)) = env.credentials() else {
        return Ok(None);
    };

    let from_email = env.from_email().unwrap_or(user);
    let from = from_email
        .parse::<EmailAddress>()
        .with_context(|| format!("Invalid sender address {from_email:?}"))?;

    let recipient = env
        .to_email()
        .map(|to_email| {
            to_email
                .parse::<EmailRecipients>()
                .with_context(|| format!("Invalid recipient list {to_email:?}"))
        })
        .transpose()?;

    Ok(Some(SmtpSettings {
        relay: SmtpRelay {
            host: env.host().into(),
            port: env.port()?,
            user: user.into(),
            password: password.to_owned().into(),
        },
        from,
        from_name: env.from_name().map(Into::into),
        recipient,
    }))
}
