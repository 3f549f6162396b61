//! Environment-driven configuration, read once at startup.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL_ID: &str = "claude-sonnet-4-5";
pub const DEFAULT_API_BASE: &str = "https://api.anthropic.com";
pub const DEFAULT_STEERING_DIR: &str = "steering";
pub const DEFAULT_CALL_TIMEOUT_SECS: u64 = 30;

/// Process-wide Court configuration. Immutable after construction; shared
/// read-only across requests.
#[derive(Debug, Clone)]
pub struct CourtConfig {
    /// Default for cases that do not carry an explicit mock override.
    pub mock_mode: bool,
    pub model_id: String,
    /// Base URL of the messages endpoint the Court talks to.
    pub api_base: String,
    pub api_key: String,
    pub steering_dir: PathBuf,
    /// Hard bound on every external model call. A timeout is an ordinary
    /// call failure and flows through the usual degradation paths.
    pub call_timeout: Duration,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            mock_mode: false,
            model_id: DEFAULT_MODEL_ID.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: String::new(),
            steering_dir: PathBuf::from(DEFAULT_STEERING_DIR),
            call_timeout: Duration::from_secs(DEFAULT_CALL_TIMEOUT_SECS),
        }
    }
}

impl CourtConfig {
    /// Build from `RELIEF_*` environment variables, with defaults for
    /// everything but the API key.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            mock_mode: flag(env::var("RELIEF_MOCK_MODE").ok()),
            model_id: env::var("RELIEF_MODEL_ID").unwrap_or(defaults.model_id),
            api_base: env::var("RELIEF_API_BASE").unwrap_or(defaults.api_base),
            api_key: env::var("RELIEF_API_KEY").unwrap_or_default(),
            steering_dir: env::var("RELIEF_STEERING_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.steering_dir),
            call_timeout: env::var("RELIEF_CALL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.call_timeout),
        }
    }
}

fn flag(raw: Option<String>) -> bool {
    raw.map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
