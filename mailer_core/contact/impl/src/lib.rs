use std::sync::Arc;

use mailer_core_contact_contracts::{ContactSendMessageError, ContactService};
use mailer_email_contracts::{
    settings::{SmtpSettings, SmtpSettingsService},
    Email, EmailService,
};
use mailer_models::{contact::ContactSubmission, email_address::EmailRecipients};
use mailer_templates_contracts::{
    ContactMessageHtmlTemplate, ContactMessageTextTemplate, TemplateService,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Settings, Email, Template> {
    pub settings: Settings,
    pub email: Email,
    pub template: Template,
    pub config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Recipients used when `TO_EMAIL` is not set.
    pub default_recipient: Arc<EmailRecipients>,
    /// Sender display name used when `FROM_NAME` is not set.
    pub sender_name: Arc<str>,
}

impl<Settings, EmailS, Template> ContactService for ContactServiceImpl<Settings, EmailS, Template>
where
    Settings: SmtpSettingsService,
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        let Some(settings) = self.settings.resolve()? else {
            return Err(ContactSendMessageError::NotConfigured);
        };

        let relay = settings.relay.clone();
        let email = self.compose(submission, settings)?;

        debug!(recipient = %email.recipient, subject = %email.subject, "relaying contact form submission");

        if !self.email.send(relay, email).await? {
            return Err(ContactSendMessageError::Send);
        }

        Ok(())
    }
}

impl<Settings, EmailS, Template> ContactServiceImpl<Settings, EmailS, Template>
where
    Template: TemplateService,
{
    fn compose(
        &self,
        submission: ContactSubmission,
        settings: SmtpSettings,
    ) -> anyhow::Result<Email> {
        let ContactSubmission {
            name,
            email,
            phone,
            subject,
            message,
            page,
        } = submission;

        let text = self.template.render(&ContactMessageTextTemplate {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.clone(),
            subject: subject.clone(),
            page: page.clone(),
            message: message.to_string(),
        })?;

        let html = self.template.render(&ContactMessageHtmlTemplate {
            name: name.to_string(),
            email: email.to_string(),
            phone,
            subject: subject.clone(),
            page,
            message: message.replace('\n', "<br/>"),
        })?;

        let sender_name = settings
            .from_name
            .unwrap_or_else(|| self.config.sender_name.to_string());

        Ok(Email {
            from: settings.from.with_name(sender_name),
            recipient: settings
                .recipient
                .unwrap_or_else(|| (*self.config.default_recipient).clone()),
            subject: format!("{subject} — from {}", *name),
            text,
            html,
            reply_to: email.parse().ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use mailer_email_contracts::{
        settings::MockSmtpSettingsService, MockEmailService, SmtpRelay,
    };
    use mailer_models::email_address::EmailAddress;
    use mailer_templates_impl::TemplateServiceImpl;
    use pretty_assertions::assert_eq;

    use super::*;

    type Sut = ContactServiceImpl<MockSmtpSettingsService, MockEmailService, TemplateServiceImpl>;

    fn sut(settings: MockSmtpSettingsService, email: MockEmailService) -> Sut {
        ContactServiceImpl {
            settings,
            email,
            template: TemplateServiceImpl::new().unwrap(),
            config: ContactServiceConfig {
                default_recipient: Arc::new("default@example.com".parse().unwrap()),
                sender_name: "Cornersites Contact".into(),
            },
        }
    }

    fn relay() -> SmtpRelay {
        SmtpRelay {
            host: "smtp.example.com".into(),
            port: 587,
            user: "relay@example.com".into(),
            password: "hunter2".to_owned().into(),
        }
    }

    fn settings() -> SmtpSettings {
        SmtpSettings {
            relay: relay(),
            from: "relay@example.com".parse().unwrap(),
            from_name: None,
            recipient: None,
        }
    }

    fn alice() -> ContactSubmission {
        ContactSubmission {
            name: "Alice".try_into().unwrap(),
            email: "a@x.com".try_into().unwrap(),
            phone: String::new(),
            subject: ContactSubmission::DEFAULT_SUBJECT.into(),
            message: "Hello\nWorld".try_into().unwrap(),
            page: String::new(),
        }
    }

    /// Email mock that records every sent email and answers with `result`.
    fn recording_email(times: usize, result: bool) -> (MockEmailService, Arc<Mutex<Vec<Email>>>) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let mut email = MockEmailService::new();
        let sent2 = Arc::clone(&sent);
        email.expect_send().times(times).returning(move |_, email| {
            sent2.lock().unwrap().push(email);
            Box::pin(std::future::ready(Ok(result)))
        });
        (email, sent)
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let settings = MockSmtpSettingsService::new().with_resolve(Some(settings()));
        let (email, sent) = recording_email(1, true);
        let sut = sut(settings, email);

        // Act
        let result = sut.send_message(alice()).await;

        // Assert
        result.unwrap();
        let sent = sent.lock().unwrap();
        let email = &sent[0];
        assert_eq!(email.subject, "Website contact — from Alice");
        assert_eq!(
            email.recipient,
            "default@example.com".parse::<EmailRecipients>().unwrap()
        );
        assert_eq!(
            EmailAddress(email.from.0.email.clone()).as_str(),
            "relay@example.com"
        );
        assert_eq!(email.from.0.name.as_deref(), Some("Cornersites Contact"));
        assert_eq!(
            email.reply_to.as_ref().map(EmailAddress::as_str),
            Some("a@x.com")
        );
        assert_eq!(
            email.text,
            "New message from website contact form\n\nName: Alice\nEmail: a@x.com\nPhone: \
             \nSubject: Website contact\nPage: \n\nMessage:\nHello\nWorld\n"
        );
        assert!(email.html.contains("<p><strong>Name:</strong> Alice</p>"));
        assert!(email.html.contains("Hello<br/>World"));
    }

    #[tokio::test]
    async fn configured_addresses() {
        // Arrange
        let settings = MockSmtpSettingsService::new().with_resolve(Some(SmtpSettings {
            from: "noreply@example.com".parse().unwrap(),
            from_name: Some("Example Contact".into()),
            recipient: Some("inbox@example.com".parse().unwrap()),
            ..settings()
        }));
        let expected = Email {
            from: "noreply@example.com"
                .parse::<EmailAddress>()
                .unwrap()
                .with_name("Example Contact"),
            recipient: "inbox@example.com".parse().unwrap(),
            subject: "Quote request — from Bob".into(),
            text: "New message from website contact form\n\nName: Bob\nEmail: \
                   bob@example.com\nPhone: +1 555 0100\nSubject: Quote request\nPage: \
                   /pricing\n\nMessage:\nHi\n"
                .into(),
            html: "<h2>New website message</h2>\n<p><strong>Name:</strong> Bob</p>\n<p><strong>\
                   Email:</strong> bob@example.com</p>\n<p><strong>Phone:</strong> +1 555 \
                   0100</p>\n<p><strong>Subject:</strong> Quote request</p>\n<p><strong>Page:\
                   </strong> /pricing</p>\n<hr/>\n<p>Hi</p>\n"
                .into(),
            reply_to: Some("bob@example.com".parse().unwrap()),
        };
        let email = MockEmailService::new().with_send(relay(), expected, true);
        let sut = sut(settings, email);

        // Act
        let result = sut
            .send_message(ContactSubmission {
                name: "Bob".try_into().unwrap(),
                email: "bob@example.com".try_into().unwrap(),
                phone: "+1 555 0100".into(),
                subject: "Quote request".into(),
                message: "Hi".try_into().unwrap(),
                page: "/pricing".into(),
            })
            .await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn recipient_list() {
        // Arrange
        let settings = MockSmtpSettingsService::new().with_resolve(Some(SmtpSettings {
            recipient: Some("Inbox <inbox@example.com>, sales@example.com".parse().unwrap()),
            ..settings()
        }));
        let (email, sent) = recording_email(1, true);
        let sut = sut(settings, email);

        // Act
        let result = sut.send_message(alice()).await;

        // Assert
        result.unwrap();
        let sent = sent.lock().unwrap();
        assert_eq!(
            sent[0].recipient.addresses().collect::<Vec<_>>(),
            ["inbox@example.com", "sales@example.com"]
        );
    }

    #[tokio::test]
    async fn not_configured() {
        // Arrange
        let settings = MockSmtpSettingsService::new().with_resolve(None);
        let sut = sut(settings, MockEmailService::new());

        // Act
        let result = sut.send_message(alice()).await;

        // Assert
        assert!(matches!(
            result,
            Err(ContactSendMessageError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn invalid_settings() {
        // Arrange
        let settings = MockSmtpSettingsService::new().with_resolve_error();
        let sut = sut(settings, MockEmailService::new());

        // Act
        let result = sut.send_message(alice()).await;

        // Assert
        assert!(matches!(result, Err(ContactSendMessageError::Other(_))));
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let settings = MockSmtpSettingsService::new().with_resolve(Some(settings()));
        let (email, _) = recording_email(1, false);
        let sut = sut(settings, email);

        // Act
        let result = sut.send_message(alice()).await;

        // Assert
        assert!(matches!(result, Err(ContactSendMessageError::Send)));
    }

    #[tokio::test]
    async fn transport_error() {
        // Arrange
        let settings = MockSmtpSettingsService::new().with_resolve(Some(settings()));
        let email = MockEmailService::new().with_send_error(relay());
        let sut = sut(settings, email);

        // Act
        let result = sut.send_message(alice()).await;

        // Assert
        assert!(matches!(result, Err(ContactSendMessageError::Other(_))));
    }

    #[tokio::test]
    async fn no_deduplication() {
        // Arrange
        let mut smtp = MockSmtpSettingsService::new();
        smtp.expect_resolve()
            .times(2)
            .returning(|| Ok(Some(settings())));
        let (email, sent) = recording_email(2, true);
        let sut = sut(smtp, email);

        // Act
        let first = sut.send_message(alice()).await;
        let second = sut.send_message(alice()).await;

        // Assert
        first.unwrap();
        second.unwrap();
        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
    }

    #[tokio::test]
    async fn line_breaks() {
        // Arrange
        let settings = MockSmtpSettingsService::new().with_resolve(Some(settings()));
        let (email, sent) = recording_email(1, true);
        let sut = sut(settings, email);

        // Act
        let result = sut
            .send_message(ContactSubmission {
                message: "one\ntwo\n\nthree\n".try_into().unwrap(),
                ..alice()
            })
            .await;

        // Assert
        result.unwrap();
        let sent = sent.lock().unwrap();
        assert!(sent[0].text.ends_with("Message:\none\ntwo\n\nthree\n\n"));
        assert!(sent[0]
            .html
            .contains("<p>one<br/>two<br/><br/>three<br/></p>"));
        assert!(!sent[0].html.contains("one\ntwo"));
    }

    #[tokio::test]
    async fn email_without_address_format() {
        // Arrange
        let settings = MockSmtpSettingsService::new().with_resolve(Some(settings()));
        let (email, sent) = recording_email(1, true);
        let sut = sut(settings, email);

        // Act
        let result = sut
            .send_message(ContactSubmission {
                email: "call me maybe".try_into().unwrap(),
                ..alice()
            })
            .await;

        // Assert
        result.unwrap();
        let sent = sent.lock().unwrap();
        assert_eq!(sent[0].reply_to, None);
        assert!(sent[0].text.contains("Email: call me maybe\n"));
    }
}
