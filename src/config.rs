use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodDataConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub food_data: FoodDataConfig,
}

pub const DEFAULT_FOODDATA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1/foods";

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "macrotrack".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "macrotrack-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        // DEMO_KEY is the rate-limited key FoodData Central hands out for evaluation.
        let food_data = FoodDataConfig {
            api_key: std::env::var("FOODDATA_CENTRAL_API_KEY").unwrap_or_else(|_| "DEMO_KEY".into()),
            base_url: std::env::var("FOODDATA_CENTRAL_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_FOODDATA_BASE_URL.into()),
            timeout_secs: std::env::var("FOODDATA_CENTRAL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(15),
        };
        Ok(Self {
            database_url,
            jwt,
            food_data,
        })
    }
}
