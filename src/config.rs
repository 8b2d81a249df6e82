//! Process configuration, read from the environment (and `.env` via dotenvy).
//!
//! | variable      | default                   |
//! |---------------|---------------------------|
//! | `OLLAMA_HOST` | `http://localhost:11434`  |
//! | `BIND_ADDR`   | `0.0.0.0:8000`            |
//! | `CORS_ORIGIN` | `http://localhost:3000`   |

use crate::services::ollama::DEFAULT_OLLAMA_HOST;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ollama_host: String,
    pub bind_addr: String,
    /// The single browser origin allowed to call the API.
    pub cors_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_host: DEFAULT_OLLAMA_HOST.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            ollama_host: read("OLLAMA_HOST", DEFAULT_OLLAMA_HOST),
            bind_addr: read("BIND_ADDR", DEFAULT_BIND_ADDR),
            cors_origin: read("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
        }
    }
}
