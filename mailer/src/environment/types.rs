use mailer_core_contact_impl::ContactServiceImpl;
use mailer_email_impl::{settings::EnvSmtpSettingsService, EmailServiceImpl};
use mailer_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = mailer_api_rest::RestServer<ContactFeature>;

// Email
pub type Email = EmailServiceImpl;
pub type SmtpSettings = EnvSmtpSettingsService;

// Template
pub type Template = TemplateServiceImpl;

// Core
pub type ContactFeature = ContactServiceImpl<SmtpSettings, Email, Template>;
