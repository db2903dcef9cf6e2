use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub whatsapp_api_url: String,
    pub whatsapp_api_token: String,
    pub whatsapp_business_account_id: String,
    pub provider_timeout_seconds: Option<u64>,

    pub database_url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

/// Everything the provider client needs. Passed by value so several
/// accounts can live side by side.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub base_url: String,
    pub access_token: String,
    pub business_account_id: String,
    pub timeout: Option<Duration>,
}

fn default_max_connections() -> u32 {
    10
}

fn default_server_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))?;
        Ok(config)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Self>(vars)
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            base_url: self.whatsapp_api_url.trim_end_matches('/').to_string(),
            access_token: self.whatsapp_api_token.clone(),
            business_account_id: self.whatsapp_business_account_id.clone(),
            timeout: self.provider_timeout_seconds.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(extra: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut vars = vec![
            ("WHATSAPP_API_URL".to_string(), "https://graph.example.com/v21.0/".to_string()),
            ("WHATSAPP_API_TOKEN".to_string(), "token".to_string()),
            ("WHATSAPP_BUSINESS_ACCOUNT_ID".to_string(), "1234".to_string()),
        ];
        vars.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        vars
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_vars(vars(&[])).unwrap();

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.database_max_connections, 10);
        assert!(config.database_url.is_none());
        assert!(config.provider_timeout_seconds.is_none());
    }

    #[test]
    fn test_provider_config_trims_base_url() {
        let config = Config::from_vars(vars(&[("PROVIDER_TIMEOUT_SECONDS", "5")])).unwrap();
        let provider = config.provider_config();

        assert_eq!(provider.base_url, "https://graph.example.com/v21.0");
        assert_eq!(provider.business_account_id, "1234");
        assert_eq!(provider.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let vars = vec![(
            "WHATSAPP_API_URL".to_string(),
            "https://graph.example.com".to_string(),
        )];

        assert!(Config::from_vars(vars).is_err());
    }
}
