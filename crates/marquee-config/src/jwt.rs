use std::env;
use std::fmt;

use crate::ConfigError;
use crate::server::Environment;

const DEV_FALLBACK_SECRET: &str = "marquee-development-secret-do-not-deploy";
const MIN_SECRET_LEN: usize = 32;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
    /// Name of the session cookie that may carry the token.
    pub cookie_name: String,
}

// The secret must never reach a log line.
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("cookie_name", &self.cookie_name)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        Self::from_lookup(environment, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(environment: Environment, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup("JWT_SECRET") {
            Some(secret) if secret.len() >= MIN_SECRET_LEN => secret,
            Some(_) if environment.is_production() => {
                return Err(ConfigError::Invalid {
                    key: "JWT_SECRET",
                    reason: format!("must be at least {} bytes", MIN_SECRET_LEN),
                });
            }
            Some(secret) if !secret.is_empty() => secret,
            _ if environment.is_production() => return Err(ConfigError::Missing("JWT_SECRET")),
            _ => DEV_FALLBACK_SECRET.to_string(),
        };

        let access_token_expiry = match lookup("JWT_ACCESS_EXPIRY") {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "JWT_ACCESS_EXPIRY",
                        reason: format!("'{}' is not a positive number of seconds", value),
                    });
                }
            },
            None => 3600, // 1 hour
        };

        let cookie_name = lookup("AUTH_COOKIE_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "jwt-netflix".to_string());

        Ok(Self {
            secret,
            access_token_expiry,
            cookie_name,
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
    fn test_development_defaults() {
        let config = JwtConfig::from_lookup(Environment::Development, |_| None).unwrap();
        assert_eq!(config.secret, DEV_FALLBACK_SECRET);
        assert_eq!(config.access_token_expiry, 3600);
        assert_eq!(config.cookie_name, "jwt-netflix");
    }

    #[test]
    fn test_production_requires_secret() {
        let result = JwtConfig::from_lookup(Environment::Production, |_| None);
        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));
    }

    #[test]
    fn test_production_rejects_short_secret() {
        let result = JwtConfig::from_lookup(
            Environment::Production,
            lookup_from(&[("JWT_SECRET", "short")]),
        );
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                ..
            })
        ));
    }

    #[test]
    fn test_custom_values() {
        let config = JwtConfig::from_lookup(
            Environment::Production,
            lookup_from(&[
                ("JWT_SECRET", "0123456789abcdef0123456789abcdef"),
                ("JWT_ACCESS_EXPIRY", "900"),
                ("AUTH_COOKIE_NAME", "session"),
            ]),
        )
        .unwrap();
        assert_eq!(config.access_token_expiry, 900);
        assert_eq!(config.cookie_name, "session");
    }

    #[test]
    fn test_invalid_expiry_rejected() {
        let result = JwtConfig::from_lookup(
            Environment::Development,
            lookup_from(&[("JWT_ACCESS_EXPIRY", "-5")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::from_lookup(
            Environment::Development,
            lookup_from(&[("JWT_SECRET", "super-secret-value-that-is-long-enough")]),
        )
        .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("<redacted>"));
    }
}
