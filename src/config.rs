use anyhow::Context;
use dotenvy::dotenv;
use std::env;

const DEFAULT_SERP_BASE_URL: &str = "https://serpapi.com";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Process-wide configuration, read from the environment once at startup
/// and passed into the clients. Nothing here changes after `main` builds it.
#[derive(Clone)]
pub struct Config {
    pub serp_api_key: String,
    pub openai_api_key: String,
    pub port: u16,
    pub serp_base_url: String,
    pub openai_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv().ok(); // Load .env file if present
        Ok(Config {
            serp_api_key: get_env("SERP_API_KEY")?,
            openai_api_key: get_env("OPENAI_API_KEY")?,
            port: get_env_or_default("PORT", "8080")
                .parse()
                .context("PORT must be a valid port number")?,
            serp_base_url: get_env_or_default("SERP_BASE_URL", DEFAULT_SERP_BASE_URL),
            openai_base_url: get_env_or_default("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
        })
    }
}

fn get_env(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("Missing required environment variable: {key}"))
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
