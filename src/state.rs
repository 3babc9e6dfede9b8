use crate::analytics::{MacroSource, PgMacroSource};
use crate::config::AppConfig;
use crate::fooddata::{FoodDataCentral, FoodSearch};
use anyhow::Context;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub food_search: Arc<dyn FoodSearch>,
    pub macros: Arc<dyn MacroSource>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let food_search = Arc::new(
            FoodDataCentral::from_config(&config.food_data).context("build FoodData Central client")?,
        ) as Arc<dyn FoodSearch>;
        let macros = Arc::new(PgMacroSource::new(db.clone())) as Arc<dyn MacroSource>;

        Ok(Self {
            db,
            config,
            food_search,
            macros,
        })
    }

    pub fn from_parts(
        db: PgPool,
        config: Arc<AppConfig>,
        food_search: Arc<dyn FoodSearch>,
        macros: Arc<dyn MacroSource>,
    ) -> Self {
        Self {
            db,
            config,
            food_search,
            macros,
        }
    }
}
