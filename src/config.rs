use std::env;

use anyhow::anyhow;

use crate::matcher::SearchMode;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    pub search_mode: SearchMode,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000/api/".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        let search_mode = match env::var("SEARCH_MODE") {
            Ok(raw) => SearchMode::parse(&raw)
                .ok_or_else(|| anyhow!("SEARCH_MODE must be `pattern` or `literal`, got `{raw}`"))?,
            Err(_) => SearchMode::default(),
        };
        Ok(Self {
            api_base_url,
            host,
            port,
            search_mode,
        })
    }
}
