//! Infrastructure layer: item storage, the item service, config, DB wiring.

pub mod config;
pub mod db;
pub mod item_service;
pub mod item_store;

pub use config::{AppConfig, ConfigError};
pub use item_service::{ItemService, ServiceError};
pub use item_store::{InMemoryItemStore, ItemStore, PostgresItemStore, StoreError, StoreResult};
