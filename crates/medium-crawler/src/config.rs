use crate::http_client::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use medium_markdown::DEFAULT_OUTPUT_DIR;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "medium_crawler=info,medium_markdown=info";

/// Settings read from the environment. Command-line flags override these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(output_dir) = lookup("MEDIUM_MD_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(output_dir);
        }

        if let Some(user_agent) = lookup("MEDIUM_MD_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Some(timeout_str) = lookup("MEDIUM_MD_TIMEOUT_SECS") {
            match timeout_str.parse::<u64>() {
                Ok(timeout) if timeout > 0 => config.timeout_secs = timeout,
                _ => eprintln!(
                    "Warning: Invalid MEDIUM_MD_TIMEOUT_SECS value '{}', using default {}",
                    timeout_str, config.timeout_secs
                ),
            }
        }

        if let Some(log_level) = lookup("RUST_LOG") {
            config.log_level = log_level;
        } else if let Some(log_level) = lookup("MEDIUM_MD_LOG_LEVEL") {
            config.log_level = log_level;
        }

        if let Some(log_format) = lookup("MEDIUM_MD_LOG_FORMAT") {
            config.log_format = match log_format.to_lowercase().as_str() {
                "text" | "plain" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    eprintln!(
                        "Warning: Invalid MEDIUM_MD_LOG_FORMAT value '{}', using default text",
                        log_format
                    );
                    LogFormat::Text
                }
            };
        }

        config
    }
}
