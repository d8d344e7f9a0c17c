use crate::error::{BadEnvVarSnafu, InvalidApiUrlSnafu, ParseTimeoutSnafu, RosterResult};
use dotenvy::var;
use reqwest::Url;
use secrecy::SecretString;
use snafu::ResultExt;
use std::{env::VarError, sync::Arc, time::Duration};

const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            api_config: Arc::new(ApiConfig::from_env()?),
            server_ip: optional_var("ROSTER_SERVER_IP")?
                .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string()),
        })
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

/// `None` only when the variable is unset; a value that is present but unreadable is an error.
fn optional_var(name: &'static str) -> RosterResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}

/// Where the students backend lives and how to talk to it.
#[derive(Debug)]
pub struct ApiConfig {
    base_url: Url,
    token: Option<SecretString>,
    timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(
        base_url: &str,
        token: Option<SecretString>,
        timeout: Option<Duration>,
    ) -> RosterResult<Self> {
        let parsed = Url::parse(base_url).map_err(|e| {
            InvalidApiUrlSnafu {
                url: base_url,
                reason: e.to_string(),
            }
            .build()
        })?;
        snafu::ensure!(
            !parsed.cannot_be_a_base() && matches!(parsed.scheme(), "http" | "https"),
            InvalidApiUrlSnafu {
                url: base_url,
                reason: "expected an http(s) url",
            }
        );

        Ok(Self {
            base_url: parsed,
            token,
            timeout,
        })
    }

    pub fn from_env() -> RosterResult<Self> {
        const URL: &str = "STUDENTS_API_URL";
        const TOKEN: &str = "STUDENTS_API_TOKEN";
        const TIMEOUT: &str = "STUDENTS_API_TIMEOUT_SECS";

        let base_url = var(URL).context(BadEnvVarSnafu { name: URL })?;
        let token = optional_var(TOKEN)?.map(SecretString::from);
        let timeout = match optional_var(TIMEOUT)? {
            Some(secs) => Some(Duration::from_secs(
                secs.trim().parse().context(ParseTimeoutSnafu { name: TIMEOUT })?,
            )),
            None => None,
        };

        Self::new(&base_url, token, timeout)
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub const fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
