//! Environment detection and the immutable API configuration
//!
//! The page host decides everything: a local host talks to the development
//! backend, anything else to the deployed one. No flag or environment
//! variable is consulted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Backend used when running from a local host
pub const LOCAL_API_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Backend used everywhere else
pub const PRODUCTION_API_URL: &str = "https://legal-llm-gemini.onrender.com/api/v1";

/// Hosts treated as a local development setup (empty = opened from file)
const LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", ""];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend endpoints reachable by POST
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    GenerateDocument,
    LegalSearch,
    Chat,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [
        Endpoint::GenerateDocument,
        Endpoint::LegalSearch,
        Endpoint::Chat,
    ];

    /// Path suffix appended to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GenerateDocument => "/generate-document",
            Endpoint::LegalSearch => "/legal-search",
            Endpoint::Chat => "/chat",
        }
    }

    /// Logical name, also the path without its leading slash
    pub fn name(&self) -> &'static str {
        &self.path()[1..]
    }
}

/// Resolved backend configuration
///
/// Built once at start-up by [`resolve`] and never mutated afterwards;
/// fields are only reachable through getters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    environment: Environment,
}

impl ApiConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Full URL of an endpoint: base URL followed by the endpoint path
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Endpoint table as `(logical name, path)` pairs
    pub fn endpoints(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        Endpoint::ALL.iter().map(|e| (e.name(), e.path()))
    }

    /// Page-facing view of the configuration
    pub fn surface(&self) -> ConfigSurface {
        ConfigSurface {
            base_url: self.base_url.clone(),
            endpoints: Endpoint::ALL
                .iter()
                .map(|e| (e.name().replace('-', "_").to_uppercase(), e.path().to_string()))
                .collect(),
            environment: self.environment,
        }
    }
}

/// `{BASE_URL, ENDPOINTS, ENVIRONMENT}` object handed to page scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ConfigSurface {
    pub base_url: String,
    pub endpoints: BTreeMap<String, String>,
    pub environment: Environment,
}

/// Whether `host` counts as a local development host
pub fn is_local_host(host: &str) -> bool {
    LOCAL_HOSTS.contains(&host)
}

/// Resolve the configuration for the page currently served from `host`
pub fn resolve(host: &str) -> ApiConfig {
    let (environment, base_url) = if is_local_host(host) {
        (Environment::Development, LOCAL_API_URL)
    } else {
        (Environment::Production, PRODUCTION_API_URL)
    };

    tracing::info!(%environment, base_url, "API configuration resolved");

    ApiConfig {
        base_url: base_url.to_string(),
        environment,
    }
}
