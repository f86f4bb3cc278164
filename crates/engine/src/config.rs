//! Engine configuration from environment variables.

use std::str::FromStr;

const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {name} value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Where the engine keeps its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Neo4j,
    /// Process-local storage, lost on restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neo4j" => Ok(Self::Neo4j),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::Invalid {
                name: "STORAGE_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
    pub server_host: String,
    pub server_port: u16,
    pub storage: StorageBackend,
    /// Comma-separated origins, or `*`. CORS is disabled when unset.
    pub cors_allowed_origins: Option<String>,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server_port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "SERVER_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };
        let storage = match var("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::Neo4j,
        };

        Ok(Self {
            neo4j_uri: var("NEO4J_URI").unwrap_or_else(|| DEFAULT_NEO4J_URI.into()),
            neo4j_user: var("NEO4J_USER").unwrap_or_else(|| "neo4j".into()),
            neo4j_password: var("NEO4J_PASSWORD").unwrap_or_else(|| "password".into()),
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port,
            storage,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
        })
    }
}

/// Load `.env.local` then `.env` from the repository root, if present.
///
/// Variables already set in the environment win.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load env file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<EngineConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.neo4j_uri, "bolt://localhost:7687");
        assert_eq!(cfg.server_port, 3000);
        assert_eq!(cfg.storage, StorageBackend::Neo4j);
        assert_eq!(cfg.cors_allowed_origins, None);
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        assert_eq!(config(&[("PORT", "8080")]).unwrap().server_port, 8080);
        assert_eq!(
            config(&[("SERVER_PORT", "9000"), ("PORT", "8080")])
                .unwrap()
                .server_port,
            9000
        );
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(config(&[("SERVER_PORT", "http")]).is_err());
        let err = config(&[("STORAGE_BACKEND", "redis")]).unwrap_err();
        assert!(err.to_string().contains("STORAGE_BACKEND"));
    }

    #[test]
    fn memory_backend_and_blank_values() {
        let cfg = config(&[("STORAGE_BACKEND", " Memory "), ("CORS_ALLOWED_ORIGINS", "  ")]).unwrap();
        assert_eq!(cfg.storage, StorageBackend::Memory);
        assert_eq!(cfg.cors_allowed_origins, None);
    }
}
