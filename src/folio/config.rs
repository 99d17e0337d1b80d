use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "folio.json";
const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DEFAULT_USERNAME: &str = "admin";
// sha256("admin123") — the out-of-the-box password. Change it with
// `folio hash-password <new password>` and update the config file.
const DEFAULT_PASSWORD_SHA256: &str =
    "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9";
const DEFAULT_SESSION_COOKIE: &str = "folio_session";

/// Server configuration, stored as `folio.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolioConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Admin login name
    #[serde(default = "default_username")]
    pub admin_username: String,

    /// Lower-hex sha-256 digest of the admin password
    #[serde(default = "default_password_sha256")]
    pub admin_password_sha256: String,

    /// Name of the session cookie
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_password_sha256() -> String {
    DEFAULT_PASSWORD_SHA256.to_string()
}

fn default_session_cookie() -> String {
    DEFAULT_SESSION_COOKIE.to_string()
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            admin_username: default_username(),
            admin_password_sha256: default_password_sha256(),
            session_cookie: default_session_cookie(),
        }
    }
}

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FolioError::Io)?;
        let config: FolioConfig =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FolioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FolioError::Serialization)?;
        fs::write(config_path, content).map_err(FolioError::Io)?;
        Ok(())
    }
}
