//! SMTP relay settings, read from the process environment on every
//! invocation so that rotated secrets are picked up without a restart.

use std::collections::HashMap;

use anyhow::Context;
use config::Environment;
use serde::Deserialize;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

pub const ENV_KEYS: &[&str] = &[
    "SMTP_HOST",
    "SMTP_PORT",
    "SMTP_USER",
    "SMTP_PASS",
    "TO_EMAIL",
    "FROM_EMAIL",
    "FROM_NAME",
];

/// Raw SMTP environment. Variables that are unset or set to the empty
/// string are both `None`.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SmtpEnvironment {
    smtp_host: Option<String>,
    smtp_port: Option<String>,
    smtp_user: Option<String>,
    smtp_pass: Option<String>,
    to_email: Option<String>,
    from_email: Option<String>,
    from_name: Option<String>,
}

impl SmtpEnvironment {
    /// Read the SMTP variables from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        let vars = ENV_KEYS
            .iter()
            .filter_map(|&key| std::env::var(key).ok().map(|value| (key.to_owned(), value)))
            .collect();
        Self::load_from(vars)
    }

    /// Read the SMTP variables from an explicit set of environment variables.
    pub fn load_from(vars: HashMap<String, String>) -> anyhow::Result<Self> {
        let mut env: Self = config::Config::builder()
            .add_source(Environment::default().source(Some(vars)))
            .build()?
            .try_deserialize()
            .context("Failed to read smtp environment")?;

        for value in [
            &mut env.smtp_host,
            &mut env.smtp_port,
            &mut env.smtp_user,
            &mut env.smtp_pass,
            &mut env.to_email,
            &mut env.from_email,
            &mut env.from_name,
        ] {
            if value.as_deref().is_some_and(str::is_empty) {
                *value = None;
            }
        }

        Ok(env)
    }

    pub fn host(&self) -> &str {
        self.smtp_host.as_deref().unwrap_or(DEFAULT_SMTP_HOST)
    }

    /// The relay port. Port `0` selects the default port like an unset
    /// variable does.
    pub fn port(&self) -> anyhow::Result<u16> {
        self.smtp_port
            .as_deref()
            .map(|port| {
                port.trim()
                    .parse::<u16>()
                    .with_context(|| format!("Invalid SMTP_PORT {port:?}"))
            })
            .transpose()
            .map(|port| port.filter(|&port| port != 0).unwrap_or(DEFAULT_SMTP_PORT))
    }

    /// Returns the user and password, or `None` if either of them is missing.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.smtp_user.as_deref().zip(self.smtp_pass.as_deref())
    }

    /// The sender address, which falls back to the SMTP user.
    pub fn from_email(&self) -> Option<&str> {
        self.from_email.as_deref().or(self.smtp_user.as_deref())
    }

    pub fn from_name(&self) -> Option<&str> {
        self.from_name.as_deref()
    }

    pub fn to_email(&self) -> Option<&str> {
        self.to_email.as_deref()
    }
}

impl std::fmt::Debug for SmtpEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpEnvironment")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_pass", &self.smtp_pass.as_ref().map(|_| "[sensitive]"))
            .field("to_email", &self.to_email)
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .finish()
    }
}
