use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: Option<String>,
    pub leeway_seconds: u64,
}

impl JwtConfig {
    /// Load JWT verification settings from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let issuer = env::var("JWT_ISSUER").ok().filter(|s| !s.trim().is_empty());

        let leeway_seconds = env::var("JWT_LEEWAY")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .unwrap_or_else(|_| panic!("Invalid JWT_LEEWAY value"));

        Self {
            secret_key,
            issuer,
            leeway_seconds,
        }
    }
}
