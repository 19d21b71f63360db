use std::sync::Arc;

use anyhow::Context;

use barang_infra::{
    config::StoreBackend, db, AppConfig, InMemoryItemStore, ItemService, ItemStore,
    PostgresItemStore,
};

pub type DynItemStore = Arc<dyn ItemStore>;

/// Services shared by every handler.
pub struct AppServices {
    pub items: ItemService<DynItemStore>,
}

impl AppServices {
    pub fn new(store: DynItemStore) -> Self {
        Self {
            items: ItemService::new(store),
        }
    }

    /// In-memory wiring (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItemStore::new()))
    }
}

pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    match &config.store {
        StoreBackend::InMemory => {
            tracing::warn!("USE_PERSISTENT_STORES not enabled; items are kept in memory only");
            Ok(AppServices::in_memory())
        }
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = db::connect(database_url, *max_connections)
                .await
                .context("failed to connect to Postgres")?;
            db::ensure_schema(&pool)
                .await
                .context("failed to prepare the items table")?;
            Ok(AppServices::new(Arc::new(PostgresItemStore::new(pool))))
        }
    }
}
