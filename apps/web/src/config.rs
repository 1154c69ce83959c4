use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_API_BASE, MAX_RETRIES};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    /// Attempts per Gemini call, including the first.
    pub gemini_max_retries: u32,
    pub port: u16,
    pub rust_log: String,
    pub data_dir: PathBuf,
    pub personas_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub images_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_API_BASE),
            gemini_max_retries: env_or("GEMINI_MAX_RETRIES", &MAX_RETRIES.to_string())
                .parse::<u32>()
                .context("GEMINI_MAX_RETRIES must be a non-negative integer")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            data_dir: env_or("DATA_DIR", "data").into(),
            personas_dir: env_or("PERSONAS_DIR", "personas").into(),
            templates_dir: env_or("TEMPLATES_DIR", "templates").into(),
            images_dir: env_or("IMAGES_DIR", "images").into(),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
