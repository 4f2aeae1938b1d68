//! Store and site configuration.
//!
//! # Responsibility
//! - Load configuration from TOML and apply environment overrides.
//! - Validate connection settings before any store handle is built.
//!
//! # Invariants
//! - The Firestore API key never appears in `Debug` or summary output.
//! - Environment lookups go through an injected function, never a global read
//!   inside validation.

use serde::Deserialize;
use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_FIRESTORE_ENDPOINT: &str = "https://firestore.googleapis.com";
pub const DEFAULT_FIRESTORE_DATABASE: &str = "(default)";
pub const DEFAULT_PROJECTS_COLLECTION: &str = "projects";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const ENV_FIRESTORE_PROJECT_ID: &str = "FOLIO_FIRESTORE_PROJECT_ID";
pub const ENV_FIRESTORE_API_KEY: &str = "FOLIO_FIRESTORE_API_KEY";
pub const ENV_FIRESTORE_ENDPOINT: &str = "FOLIO_FIRESTORE_ENDPOINT";
pub const ENV_SQLITE_PATH: &str = "FOLIO_SQLITE_PATH";
pub const ENV_CONTACT_EMAIL: &str = "FOLIO_CONTACT_EMAIL";

const REDACTED: &str = "<redacted>";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Connection settings for the Firestore REST backend.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FirestoreConfig {
    pub project_id: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: None,
            endpoint: default_endpoint(),
            database: default_database(),
            collection: default_collection(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// # Errors
    /// - Empty project id, database or collection.
    /// - Endpoint without an `http://` or `https://` scheme.
    /// - Zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_id.trim().is_empty() {
            return Err(ConfigError::invalid("firestore.project_id", "cannot be empty"));
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::invalid("firestore.database", "cannot be empty"));
        }
        if self.collection.trim().is_empty() {
            return Err(ConfigError::invalid("firestore.collection", "cannot be empty"));
        }
        let endpoint = self.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "firestore.endpoint",
                format!("expected http(s) URL, got `{endpoint}`"),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "firestore.timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Full `documents:runQuery` URL for the configured database.
    pub fn run_query_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents:runQuery",
            self.endpoint.trim().trim_end_matches('/'),
            self.project_id.trim(),
            self.database.trim()
        )
    }
}

impl Debug for FirestoreConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreConfig")
            .field("project_id", &self.project_id)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("endpoint", &self.endpoint)
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Local SQLite document store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SqliteConfig {
    pub path: PathBuf,
}

/// Contact details used by the presentation shell for mail-to actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    #[serde(default)]
    pub email: Option<String>,
}

/// Top-level configuration file shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    #[serde(default)]
    pub firestore: Option<FirestoreConfig>,
    #[serde(default)]
    pub sqlite: Option<SqliteConfig>,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl FolioConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Applies overrides from the given variable lookup.
    ///
    /// A project id from the environment creates the Firestore section when
    /// the file has none. Key and endpoint only patch an existing section.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(project_id) = non_empty(ENV_FIRESTORE_PROJECT_ID) {
            match self.firestore.as_mut() {
                Some(firestore) => firestore.project_id = project_id,
                None => self.firestore = Some(FirestoreConfig::new(project_id)),
            }
        }
        if let Some(firestore) = self.firestore.as_mut() {
            if let Some(api_key) = non_empty(ENV_FIRESTORE_API_KEY) {
                firestore.api_key = Some(api_key);
            }
            if let Some(endpoint) = non_empty(ENV_FIRESTORE_ENDPOINT) {
                firestore.endpoint = endpoint;
            }
        }
        if let Some(path) = non_empty(ENV_SQLITE_PATH) {
            self.sqlite = Some(SqliteConfig {
                path: PathBuf::from(path),
            });
        }
        if let Some(email) = non_empty(ENV_CONTACT_EMAIL) {
            self.contact.email = Some(email);
        }
    }

    pub fn apply_process_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(firestore) = &self.firestore {
            firestore.validate()?;
        }
        if let Some(sqlite) = &self.sqlite {
            if sqlite.path.as_os_str().is_empty() {
                return Err(ConfigError::invalid("sqlite.path", "cannot be empty"));
            }
        }
        if let Some(email) = &self.contact.email {
            if !email.contains('@') {
                return Err(ConfigError::invalid(
                    "contact.email",
                    format!("expected an email address, got `{email}`"),
                ));
            }
        }
        Ok(())
    }

    /// Key/value lines safe to print. Secrets are redacted.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let mut lines = Vec::new();
        match &self.firestore {
            Some(firestore) => {
                lines.push(("firestore.project_id", firestore.project_id.clone()));
                lines.push((
                    "firestore.api_key",
                    firestore
                        .api_key
                        .as_ref()
                        .map_or_else(|| "<unset>".to_string(), |_| REDACTED.to_string()),
                ));
                lines.push(("firestore.endpoint", firestore.endpoint.clone()));
                lines.push(("firestore.database", firestore.database.clone()));
                lines.push(("firestore.collection", firestore.collection.clone()));
                lines.push(("firestore.timeout_secs", firestore.timeout_secs.to_string()));
            }
            None => lines.push(("firestore", "<unset>".to_string())),
        }
        lines.push((
            "sqlite.path",
            self.sqlite
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |s| s.path.display().to_string()),
        ));
        lines.push((
            "contact.email",
            self.contact
                .email
                .clone()
                .unwrap_or_else(|| "<unset>".to_string()),
        ));
        lines
    }
}

fn default_endpoint() -> String {
    DEFAULT_FIRESTORE_ENDPOINT.to_string()
}

fn default_database() -> String {
    DEFAULT_FIRESTORE_DATABASE.to_string()
}

fn default_collection() -> String {
    DEFAULT_PROJECTS_COLLECTION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
