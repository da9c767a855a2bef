use std::env;

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub store_backend: String,
    pub mongo_uri: String,
    pub mongo_db: String,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env::var("SNIPSTASH_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3001);
        let store_backend = env::var("SNIPSTASH_STORE").unwrap_or_else(|_| "mongodb".to_string());
        let mongo_uri = env::var("SNIPSTASH_MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let mongo_db = env::var("SNIPSTASH_MONGO_DB").unwrap_or_else(|_| "snipstash".to_string());
        let allowed_origins = env::var("SNIPSTASH_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            port,
            store_backend,
            mongo_uri,
            mongo_db,
            allowed_origins,
        }
    }
}
