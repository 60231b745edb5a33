use crate::bmi::repo::BmiStore;
use crate::config::AppConfig;

/// Shared router state. The store is opened once at startup and cloned into
/// every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: BmiStore,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let store = BmiStore::connect(&config.database_url, config.db_max_connections).await?;
        store.migrate().await?;
        Ok(Self::from_parts(store))
    }

    pub fn from_parts(store: BmiStore) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub async fn for_tests() -> Self {
        Self::from_parts(BmiStore::in_memory().await)
    }
}
