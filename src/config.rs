// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self { port, rust_log }
    }
}
