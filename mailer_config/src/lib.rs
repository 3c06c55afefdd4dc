use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use mailer_models::email_address::EmailRecipients;
use serde::Deserialize;

pub mod smtp;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon separated list of config files.
pub const CONFIG_PATH_ENV: &str = "MAILER_CONFIG";

/// Load the config files listed in `MAILER_CONFIG`, falling back to the
/// bundled `config.toml`. Later files override earlier ones.
pub fn load() -> anyhow::Result<Config> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(paths) => load_paths(&paths.split(':').collect::<Vec<_>>()),
        Err(_) => load_paths(&[DEFAULT_CONFIG_PATH]),
    }
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    #[serde(default = "default_http_path")]
    pub path: String,
}

fn default_http_path() -> String {
    "/".into()
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub default_recipient: EmailRecipients,
    pub sender_name: String,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(config.http.path, "/");
        assert_eq!(
            config.contact.default_recipient.addresses().collect::<Vec<_>>(),
            ["cornercartonlinemarket@gmail.com"]
        );
    }

    #[test]
    fn later_files_override() {
        let path = std::env::temp_dir().join(format!(
            "mailer_config_override_{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[contact]\ndefault_recipient = \"inbox@example.com\"").unwrap();
        drop(file);

        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH), path.as_path()]).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config.contact.default_recipient.addresses().collect::<Vec<_>>(),
            ["inbox@example.com"]
        );
        assert_eq!(config.contact.sender_name, "Cornersites Contact");
    }

    #[test]
    fn missing_file() {
        let result = load_paths(&[Path::new("/nonexistent/mailer.toml")]);
        assert!(result.is_err());
    }
}
