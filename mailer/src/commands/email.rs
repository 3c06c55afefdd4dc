use anyhow::{ensure, Context};
use clap::Subcommand;
use mailer_config::Config;
use mailer_email_contracts::{
    settings::{SmtpSettings, SmtpSettingsService},
    Email, EmailService,
};
use mailer_email_impl::{settings::EnvSmtpSettingsService, EmailServiceImpl};
use mailer_models::email_address::EmailRecipients;
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Send a test email
    Test {
        /// Comma separated recipients of the test email, defaults to the
        /// contact form recipients
        recipient: Option<EmailRecipients>,
    },
    /// Check that the SMTP relay accepts connections
    Ping,
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let settings = EnvSmtpSettingsService
            .resolve()?
            .context("SMTP_USER and SMTP_PASS must be set")?;

        match self {
            EmailCommand::Test { recipient } => test(config, settings, recipient).await,
            EmailCommand::Ping => ping(settings).await,
        }
    }
}

async fn test(
    config: Config,
    settings: SmtpSettings,
    recipient: Option<EmailRecipients>,
) -> anyhow::Result<()> {
    let recipient = recipient
        .or(settings.recipient)
        .unwrap_or(config.contact.default_recipient);
    let sender_name = settings
        .from_name
        .unwrap_or(config.contact.sender_name);

    info!("Sending test email to {recipient}");

    let ok = EmailServiceImpl
        .send(
            settings.relay,
            Email {
                from: settings.from.with_name(sender_name),
                recipient,
                subject: "Email Deliverability Test".into(),
                text: "Email deliverability seems to be working!\n".into(),
                html: "<p>Email deliverability seems to be working!</p>".into(),
                reply_to: None,
            },
        )
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}

async fn ping(settings: SmtpSettings) -> anyhow::Result<()> {
    info!(
        "Connecting to smtp server {}:{}",
        settings.relay.host, settings.relay.port
    );
    EmailServiceImpl.ping(settings.relay).await?;
    info!("Smtp server is reachable");
    Ok(())
}
