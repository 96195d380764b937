use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read an env var, treating whitespace-only values as unset.
fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u16(profile: &str, key: &str, default: u16) -> u16 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_u32(profile: &str, key: &str, default: u32) -> u32 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_u64(profile: &str, key: &str, default: u64) -> u64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub data: DataConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `HELPDESK_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("HELPDESK_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            server: ServerConfig::from_env_profiled(p),
            llm: LlmConfig::from_env_profiled(p),
            data: DataConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  server:  {}:{}", self.server.host, self.server.port);
        tracing::info!(
            "  llm:     model={}, configured={}",
            self.llm.gemini_model,
            self.llm.is_configured()
        );
        tracing::info!(
            "  data:    tickets={}",
            self.data
                .tickets_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in sample)".to_string())
        );
    }

    /// Return a redacted view safe for API responses (no secrets).
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "server": { "host": self.server.host, "port": self.server.port },
            "llm": {
                "model": self.llm.gemini_model,
                "configured": self.llm.is_configured(),
                "timeout_secs": self.llm.timeout_secs,
            },
            "data": { "tickets_path": self.data.tickets_path },
        })
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            host: profiled_env_or(p, "HOST", "0.0.0.0"),
            port: profiled_env_u16(p, "PORT", 3001),
            cors_origin: profiled_env_or(p, "CORS_ORIGIN", "*"),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── LLM (Gemini) ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Only a non-blank key enables remote insights; see [`LlmConfig::api_key`].
    #[serde(skip_serializing)]
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl LlmConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            gemini_api_key: profiled_env_opt(p, "GEMINI_API_KEY"),
            gemini_model: profiled_env_or(p, "GEMINI_MODEL", "gemini-1.5-flash"),
            temperature: profiled_env_or(p, "LLM_TEMPERATURE", "0.4")
                .parse()
                .unwrap_or(0.4),
            max_tokens: profiled_env_u32(p, "LLM_MAX_TOKENS", 2048),
            timeout_secs: profiled_env_u64(p, "LLM_TIMEOUT_SECS", 30),
        }
    }

    /// Config with no credential, for heuristic-only runs and tests.
    pub fn disabled() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: "gemini-1.5-flash".to_string(),
            temperature: 0.4,
            max_tokens: 2048,
            timeout_secs: 30,
        }
    }

    /// The API key with surrounding whitespace removed; `None` when unset or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }
}

// ── Ticket data ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON array of tickets; the built-in sample set is used when unset.
    pub tickets_path: Option<PathBuf>,
}

impl DataConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            tickets_path: profiled_env_opt(p, "TICKETS_PATH").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_llm_is_not_configured() {
        assert!(!LlmConfig::disabled().is_configured());
    }

    #[test]
    fn blank_key_set_directly_is_not_configured() {
        let mut cfg = LlmConfig::disabled();
        cfg.gemini_api_key = Some(" \t\n".into());
        assert!(!cfg.is_configured());
        assert_eq!(cfg.api_key(), None);

        cfg.gemini_api_key = Some("  key-1 ".into());
        assert!(cfg.is_configured());
        assert_eq!(cfg.api_key(), Some("key-1"));
    }

    #[test]
    fn blank_key_counts_as_absent() {
        // Unique key name so parallel tests don't collide.
        env::set_var("HDTEST_BLANK_GEMINI_API_KEY", "   ");
        assert_eq!(env_opt("HDTEST_BLANK_GEMINI_API_KEY"), None);
        env::set_var("HDTEST_BLANK_GEMINI_API_KEY", "  abc \n");
        assert_eq!(env_opt("HDTEST_BLANK_GEMINI_API_KEY").as_deref(), Some("abc"));
        env::remove_var("HDTEST_BLANK_GEMINI_API_KEY");
    }

    #[test]
    fn profile_prefix_wins_over_plain_key() {
        env::set_var("HDTEST_PLAIN_PORT", "4000");
        env::set_var("STAGE_HDTEST_PLAIN_PORT", "4100");
        assert_eq!(profiled_env_u16("STAGE", "HDTEST_PLAIN_PORT", 1), 4100);
        assert_eq!(profiled_env_u16("", "HDTEST_PLAIN_PORT", 1), 4000);
        assert_eq!(profiled_env_u16("OTHER", "HDTEST_PLAIN_PORT", 1), 4000);
        env::remove_var("HDTEST_PLAIN_PORT");
        env::remove_var("STAGE_HDTEST_PLAIN_PORT");
    }

    #[test]
    fn redacted_summary_hides_key() {
        let mut cfg = Config::for_profile("HDTEST_REDACT");
        cfg.llm.gemini_api_key = Some("secret-key".into());
        let rendered = cfg.redacted_summary().to_string();
        assert!(!rendered.contains("secret-key"));
        assert_eq!(cfg.redacted_summary()["llm"]["configured"], true);
    }
}
