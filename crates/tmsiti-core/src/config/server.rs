//! `[server]` section: listener, request body cap, and CORS.

use serde::{Deserialize, Serialize};

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on any request body, multipart uploads included.
    pub body_limit_bytes: usize,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// `host:port` string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            body_limit_bytes: 20 * 1024 * 1024,
            cors: CorsConfig::default(),
        }
    }
}

/// Cross-origin policy for the public site and the admin panel.
///
/// A `"*"` entry in `allowed_origins` or `allowed_headers` means "any".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime.
    pub max_age_seconds: u64,
}

impl CorsConfig {
    /// Whether every origin is accepted.
    pub fn any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Whether every request header is accepted.
    pub fn any_header(&self) -> bool {
        self.allowed_headers.iter().any(|h| h == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .into_iter()
                .map(String::from)
                .collect(),
            allowed_headers: vec!["*".into()],
            max_age_seconds: 3600,
        }
    }
}
