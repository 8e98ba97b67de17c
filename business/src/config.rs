use std::any::Any;

use log::info;
use serde::Deserialize;
use syc_states::State;
use thiserror::Error;
use ustr::Ustr;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read SYC_* environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("SYC_API_BASE_URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Overrides read from the process environment.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    syc_api_base_url: Option<String>,
    syc_resource_prefix: Option<String>,
    syc_remote_sync: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Path segment every resource URL is nested under.
    pub resource_prefix: String,
    /// Mirror management edits to the backend instead of keeping them local.
    pub remote_sync: bool,
}

impl BusinessConfig {
    /// Default config with any `SYC_*` overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        let mut config = Self::default();

        if let Some(base) = raw.syc_api_base_url {
            let base = base.trim_end_matches('/').to_owned();
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl(base));
            }
            info!("BusinessConfig: api base overridden to {base}");
            config.api_base_url = base;
        }
        if let Some(prefix) = raw.syc_resource_prefix {
            config.resource_prefix = prefix.trim_matches('/').to_owned();
        }
        if let Some(remote_sync) = raw.syc_remote_sync {
            config.remote_sync = remote_sync;
        }

        Ok(config)
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from(&format!("/{}", self.resource_prefix))
        } else {
            Ustr::from(&format!("{}/{}", self.api_base_url, self.resource_prefix))
        }
    }

    /// Collection URL for a resource such as `locksmiths`.
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{resource}", self.api_url())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else if cfg!(feature = "env_test") {
                "https://admin-test.sycmobile.com".to_owned()
            } else if cfg!(feature = "env_internal") {
                "https://admin-internal.sycmobile.com".to_owned()
            } else if cfg!(feature = "env_nightly") {
                "https://admin-nightly.sycmobile.com".to_owned()
            } else {
                "https://admin.sycmobile.com".to_owned()
            },
            resource_prefix: "api".to_owned(),
            remote_sync: false,
        }
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
