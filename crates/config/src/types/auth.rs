//! Authentication types for the UptimeRobot client configuration.
//!
//! UptimeRobot authenticates every request with a static API key passed as
//! a query parameter; there is no session or token exchange.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Account-wide or monitor-specific API key.
    #[serde(with = "secret_string")]
    pub api_key: SecretString,
}

impl AuthConfig {
    /// Create an auth config from a plain API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_api_key_not_in_debug_output() {
        let auth = AuthConfig::new("u123-secret");
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("u123-secret"));
    }

    #[test]
    fn test_api_key_serde_roundtrip() {
        let auth = AuthConfig::new("u123-secret");
        let json = serde_json::to_string(&auth).unwrap();
        assert_eq!(json, r#"{"api_key":"u123-secret"}"#);

        let parsed: AuthConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api_key.expose_secret(), "u123-secret");
    }
}
