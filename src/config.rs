use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub database_path: String,

    // Server
    pub port: u16,

    // Admin surface; CRUD endpoints are disabled when unset
    pub admin_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Storage
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "eotc_answers.db".to_string()),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Admin
            admin_api_key: std::env::var("ADMIN_API_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
        })
    }
}
