//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Pattern resource configuration
    pub patterns: PatternsConfig,
    /// Voice I/O configuration
    pub voice: VoiceConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Pattern resource configuration
#[derive(Debug, Clone)]
pub struct PatternsConfig {
    /// Path to the JSON file holding the (pattern, response) pairs
    pub path: String,
}

/// Voice I/O configuration
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    /// Whether the voice endpoints are mounted
    pub enabled: bool,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            patterns: PatternsConfig {
                path: env::var("PATTERNS_PATH")
                    .unwrap_or_else(|_| "legal_patterns.json".to_string()),
            },
            voice: VoiceConfig {
                enabled: env::var("VOICE_ENABLED")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(true),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
