use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("unknown LIKES_STORE '{0}', expected 'supabase' or 'memory'")]
    UnknownStore(String),
}

/// Which record store backs the service.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreConfig {
    Supabase { url: String, key: String },
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: String,
    pub store: StoreConfig,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let store = match var("LIKES_STORE").as_deref() {
            None | Some("supabase") => StoreConfig::Supabase {
                url: var("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?,
                key: var("SUPABASE_KEY").ok_or(ConfigError::Missing("SUPABASE_KEY"))?,
            },
            Some("memory") => StoreConfig::Memory,
            Some(other) => return Err(ConfigError::UnknownStore(other.to_string())),
        };

        Ok(Self {
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_to_supabase() {
        let config = load(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_KEY", "secret"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(
            config.store,
            StoreConfig::Supabase {
                url: "https://abc.supabase.co".into(),
                key: "secret".into(),
            }
        );
    }

    #[test]
    fn supabase_requires_credentials() {
        assert_eq!(
            load(&[("SUPABASE_KEY", "secret")]),
            Err(ConfigError::Missing("SUPABASE_URL"))
        );
        assert_eq!(
            load(&[("SUPABASE_URL", "https://abc.supabase.co"), ("SUPABASE_KEY", " ")]),
            Err(ConfigError::Missing("SUPABASE_KEY"))
        );
    }

    #[test]
    fn memory_store_needs_no_credentials() {
        let config = load(&[("LIKES_STORE", "memory"), ("BIND_ADDR", "127.0.0.1:8080")]).unwrap();

        assert_eq!(config.store, StoreConfig::Memory);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn rejects_unknown_store() {
        assert_eq!(
            load(&[("LIKES_STORE", "redis")]),
            Err(ConfigError::UnknownStore("redis".into()))
        );
    }
}
