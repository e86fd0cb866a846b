use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::prompt::DEFAULT_DIALECT;

/// Route of the server-side function that forwards prompts to the model.
pub const API_PROXY_PATH: &str = "/.netlify/functions/dialettami";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub proxy_base_url: String,
    pub default_dialect: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy_base_url: "http://localhost:8888".to_string(),
            default_dialect: DEFAULT_DIALECT.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn path() -> PathBuf {
        let exe = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
        let dir = exe.parent().unwrap_or(Path::new("."));
        dir.join("config.json")
    }

    /// `config.json` next to the executable, then environment overrides.
    pub fn load() -> Self {
        let mut cfg = Self::load_from(&Self::path());
        cfg.apply_env();
        cfg
    }

    /// Missing or broken files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str::<Config>(&s).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                Self::default()
            }),
            Err(_) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
        }
    }

    pub fn apply_env(&mut self) {
        if let Some(v) = env_nonempty("DIALETTAMI_PROXY_URL") {
            self.proxy_base_url = v;
        }
        if let Some(v) = env_nonempty("DIALETTAMI_DIALECT") {
            self.default_dialect = v;
        }
        if let Some(v) = env_nonempty("DIALETTAMI_TIMEOUT_SECS") {
            match v.parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => tracing::warn!(value = %v, "ignoring invalid DIALETTAMI_TIMEOUT_SECS"),
            }
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.proxy_base_url.trim_end_matches('/'), API_PROXY_PATH)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
