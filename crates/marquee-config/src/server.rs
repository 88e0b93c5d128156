use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::ConfigError;

/// Deployment environment. Production hides internal error detail and
/// refuses to start without a real signing secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" | "test" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::Invalid {
                key: "APP_ENV",
                reason: format!("unknown environment '{}'", other),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub environment: Environment,
    pub bind_address: String,
    /// Upper bound on one user-store lookup made by the auth gate.
    pub user_lookup_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV") {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };

        let user_lookup_timeout = match lookup("USER_LOOKUP_TIMEOUT_MS") {
            Some(value) => {
                let ms: u64 = value.trim().parse().map_err(|_| ConfigError::Invalid {
                    key: "USER_LOOKUP_TIMEOUT_MS",
                    reason: format!("'{}' is not a number of milliseconds", value),
                })?;
                if ms == 0 {
                    return Err(ConfigError::Invalid {
                        key: "USER_LOOKUP_TIMEOUT_MS",
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_millis(ms)
            }
            None => Duration::from_millis(5000),
        };

        Ok(Self {
            environment,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:5000".to_string()),
            user_lookup_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.user_lookup_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_production_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[("APP_ENV", "Production")])).unwrap();
        assert!(config.environment.is_production());
    }

    #[test]
    fn test_unknown_environment_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("APP_ENV", "staging-ish")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "APP_ENV", .. })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("USER_LOOKUP_TIMEOUT_MS", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_timeout() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("USER_LOOKUP_TIMEOUT_MS", "250")])).unwrap();
        assert_eq!(config.user_lookup_timeout, Duration::from_millis(250));
    }
}
