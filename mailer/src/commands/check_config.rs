use anyhow::Context;
use mailer_config::{smtp::SmtpEnvironment, Config};
use mailer_email_contracts::settings::SmtpSettingsService;
use mailer_email_impl::settings::EnvSmtpSettingsService;
use tracing::warn;

use crate::environment::Provider;

pub fn check_config(config: Config, verbose: bool) -> anyhow::Result<()> {
    Provider::new(&config)?;

    let settings = EnvSmtpSettingsService
        .resolve()
        .context("Invalid SMTP environment")?;

    if verbose {
        println!("{config:#?}");
        println!("{:#?}", SmtpEnvironment::load()?);
    }

    if settings.is_none() {
        warn!("SMTP_USER and SMTP_PASS are not set, submissions will be answered with an error");
    }

    Ok(())
}
