use mailer_config::Config;
use mailer_email_contracts::settings::SmtpSettingsService;
use mailer_email_impl::settings::EnvSmtpSettingsService;
use tracing::{info, warn};

use crate::environment::Provider;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let provider = Provider::new(&config)?;

    // The environment is read again for every request, this only reports
    // problems early.
    match EnvSmtpSettingsService.resolve() {
        Ok(Some(_)) => {}
        Ok(None) => warn!("SMTP credentials not configured"),
        Err(err) => warn!("Invalid SMTP environment: {err:#}"),
    }

    let server = provider.rest_server();
    info!(
        "Starting http server on {}:{} at {}",
        config.http.host, config.http.port, config.http.path
    );
    server.serve(config.http.host, config.http.port).await
}
