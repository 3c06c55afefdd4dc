use anyhow::ensure;
use mailer_api_rest::RestServerConfig;
use mailer_config::Config;
use mailer_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use types::{ContactFeature, RestServer, Template};

pub mod types;

/// Builds the services of the application from the loaded configuration.
#[derive(Debug, Clone)]
pub struct Provider {
    rest_server_config: RestServerConfig,
    contact_service_config: ContactServiceConfig,
    template: Template,
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        ensure!(
            config.http.path.starts_with('/'),
            "http.path must start with a `/`, got {:?}",
            config.http.path
        );

        let rest_server_config = RestServerConfig {
            path: config.http.path.clone(),
        };

        let contact_service_config = ContactServiceConfig {
            default_recipient: config.contact.default_recipient.clone().into(),
            sender_name: config.contact.sender_name.as_str().into(),
        };

        Ok(Self {
            rest_server_config,
            contact_service_config,
            template: Template::new()?,
        })
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer {
            contact: self.contact_feature(),
            config: self.rest_server_config.clone(),
        }
    }

    pub fn contact_feature(&self) -> ContactFeature {
        ContactServiceImpl {
            settings: Default::default(),
            email: Default::default(),
            template: self.template.clone(),
            config: self.contact_service_config.clone(),
        }
    }
}
