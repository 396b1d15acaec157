use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "https://rpc.gandi.net/iaas";
pub const DEFAULT_API_TOKEN: &str = "";
pub const DEFAULT_CONSOLE_HOST: &str = "console.gandi.net";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

/// Everything a command invocation needs from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: String,
    /// Default SSH key reference used by `vm create` when `--ssh-key` is absent.
    pub ssh_key: Option<String>,
    pub console_host: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: get_api_base_url(),
            api_token: get_api_token(),
            ssh_key: get_ssh_key(),
            console_host: get_console_host(),
            poll_interval: get_poll_interval(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: DEFAULT_API_TOKEN.to_string(),
            ssh_key: None,
            console_host: DEFAULT_CONSOLE_HOST.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_api_token() -> String {
    env::var("API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string())
}

pub fn get_ssh_key() -> Option<String> {
    env::var("SSH_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

pub fn get_console_host() -> String {
    let raw = env::var("CONSOLE_HOST").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CONSOLE_HOST.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn get_poll_interval() -> Duration {
    let secs = env::var("POLL_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
    Duration::from_secs(secs)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
