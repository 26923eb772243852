use std::env;
use std::path::{Path, PathBuf};

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "APPUNTI_HOST";
    pub const PORT: &str = "APPUNTI_PORT";
    /// Directory the default note paths are anchored to.
    pub const ROOT: &str = "APPUNTI_ROOT";
    pub const READ_PATH: &str = "APPUNTI_READ_PATH";
    pub const WRITE_PATH: &str = "APPUNTI_WRITE_PATH";
    pub const USER_AGENT: &str = "APPUNTI_USER_AGENT";
    /// Set to "true" or "1" to include the error chain in error responses.
    pub const EXPOSE_ERROR_DETAIL: &str = "APPUNTI_EXPOSE_ERROR_DETAIL";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 5174;
    pub const STATIC_DIR: &str = "static";
    pub const DATA_DIR: &str = "data";
    pub const NOTES_FILE: &str = "Appunti.json";
}

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Where the note document is served from
    pub read_path: PathBuf,
    /// Where saved note documents are written
    pub write_path: PathBuf,
    pub user_agent: String,
    pub expose_error_detail: bool,
}

impl Config {
    /// Build the config from the process environment.
    ///
    /// `APPUNTI_ROOT` falls back to the working directory at startup, so the
    /// note paths stay fixed even if the process later changes directory.
    pub fn from_env() -> Self {
        let root = env::var(env_vars::ROOT)
            .map(PathBuf::from)
            .or_else(|_| env::current_dir())
            .unwrap_or_else(|_| PathBuf::from("."));

        let mut config = Self::with_root(&root);

        if let Ok(host) = env::var(env_vars::HOST) {
            config.host = host;
        }
        if let Some(port) = env::var(env_vars::PORT).ok().and_then(|s| s.parse().ok()) {
            config.port = port;
        }
        if let Ok(path) = env::var(env_vars::READ_PATH) {
            config.read_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var(env_vars::WRITE_PATH) {
            config.write_path = PathBuf::from(path);
        }
        if let Ok(ua) = env::var(env_vars::USER_AGENT) {
            config.user_agent = ua;
        }
        config.expose_error_detail = env::var(env_vars::EXPOSE_ERROR_DETAIL)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        config
    }

    /// Defaults with both note paths anchored under `root`
    pub fn with_root(root: &Path) -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            read_path: root.join(defaults::STATIC_DIR).join(defaults::NOTES_FILE),
            write_path: root.join(defaults::DATA_DIR).join(defaults::NOTES_FILE),
            user_agent: format!("appunti-service/{}", VERSION),
            expose_error_detail: false,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}
