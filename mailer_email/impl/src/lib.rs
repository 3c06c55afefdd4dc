use anyhow::anyhow;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use mailer_email_contracts::{Email, EmailService, SmtpRelay};
use tracing::debug;

pub mod settings;

/// Sends emails through the relay passed with each call. A new transport is
/// built for every send so that each invocation uses its own settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailServiceImpl;

impl EmailServiceImpl {
    fn transport(relay: &SmtpRelay) -> anyhow::Result<AsyncSmtpTransport<Tokio1Executor>> {
        let tls = TlsParameters::new(relay.host.clone())?;
        let tls = if relay.secure() {
            Tls::Wrapper(tls)
        } else {
            Tls::Opportunistic(tls)
        };

        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&relay.host)
                .port(relay.port)
                .tls(tls)
                .credentials(Credentials::new(
                    relay.user.clone(),
                    relay.password.0.clone(),
                ))
                .build(),
        )
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, relay: SmtpRelay, email: Email) -> anyhow::Result<bool> {
        let message = build_message(email)?;
        let transport = Self::transport(&relay)?;

        debug!(host = %relay.host, port = relay.port, secure = relay.secure(), "sending email");

        transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self, relay: SmtpRelay) -> anyhow::Result<()> {
        Self::transport(&relay)?
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(email: Email) -> anyhow::Result<Message> {
    let mut builder = Message::builder().from(email.from.0).subject(email.subject);

    for recipient in email.recipient.0 {
        builder = builder.to(recipient);
    }

    if let Some(reply_to) = email.reply_to {
        builder = builder.reply_to(Mailbox::new(None, reply_to.0));
    }

    builder
        .multipart(MultiPart::alternative_plain_html(email.text, email.html))
        .map_err(Into::into)
}
