use std::net::SocketAddr;
use std::path::PathBuf;

/// Backend origin used when `DIFTERI_API_URL` is unset or empty.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Prediction backend base URL, without a trailing slash.
    pub api_url: String,
    pub bind: SocketAddr,
    /// Directory holding the persisted diagnosis slot.
    pub data_dir: PathBuf,
    pub log_json: bool,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let api_url = resolve_api_url(&lookup("DIFTERI_API_URL").unwrap_or_default());

        let bind_raw = lookup("DIFTERI_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_raw
            .parse()
            .map_err(|e| eyre::eyre!("invalid DIFTERI_BIND '{bind_raw}': {e}"))?;

        let data_dir = match lookup("DIFTERI_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let log_json = lookup("DIFTERI_LOG_JSON")
            .is_some_and(|v| !matches!(v.trim(), "" | "0" | "false"));

        Ok(Self {
            api_url,
            bind,
            data_dir,
            log_json,
        })
    }
}

/// Trim trailing slashes; an empty value means the default backend.
pub fn resolve_api_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("com.difteri.intake"))
}
