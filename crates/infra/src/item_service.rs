//! Item use cases: validate, then delegate to the store.
//!
//! Every operation is a single linear sequence:
//!
//! 1. Resolve the target item when the use case names an id
//! 2. Run the field rules, then the name/serial uniqueness checks
//! 3. Call the store and return its result
//!
//! Uniqueness is a read-then-write check. Concurrent writers can both pass it;
//! the Postgres schema's UNIQUE columns reject the loser with
//! `StoreError::Conflict`.

use thiserror::Error;
use tracing::instrument;

use barang_core::{DomainError, Entity, ItemId};
use barang_inventory::{
    not_found_message, Item, ItemDraft, ItemFields, NAME_IN_USE, SERIAL_IN_USE,
};

use crate::item_store::{ItemStore, StoreError};

/// Tagged failure of an item use case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Domain(DomainError::NotFound(_)))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Domain(DomainError::Validation(_)))
    }
}

/// Use-case layer over an [`ItemStore`].
pub struct ItemService<S> {
    store: S,
}

impl<S> ItemService<S>
where
    S: ItemStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self, draft), err)]
    pub async fn create(&self, draft: ItemDraft) -> Result<Item, ServiceError> {
        let fields = self.validate(&draft, None).await?;
        let item = self.store.save(None, fields).await?;
        tracing::info!(item_id = %item.id, "item created");
        Ok(item)
    }

    #[instrument(skip(self, draft), fields(item_id = %id), err)]
    pub async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, ServiceError> {
        let existing = self.require(id).await?;
        let fields = self.validate(&draft, Some(existing.id())).await?;
        let item = self
            .store
            .save(Some(existing.id()), fields)
            .await
            .map_err(|e| match e {
                // Deleted after `require` found it.
                StoreError::Missing(id) => {
                    ServiceError::from(DomainError::not_found(not_found_message(id)))
                }
                other => ServiceError::from(other),
            })?;
        tracing::info!(item_id = %item.id, "item updated");
        Ok(item)
    }

    #[instrument(skip(self), fields(item_id = %id), err)]
    pub async fn find_one(&self, id: ItemId) -> Result<Item, ServiceError> {
        self.require(id).await
    }

    #[instrument(skip(self), err)]
    pub async fn find_all(&self) -> Result<Vec<Item>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// Items whose name contains `fragment`.
    #[instrument(skip(self), err)]
    pub async fn find_by_name(&self, fragment: &str) -> Result<Vec<Item>, ServiceError> {
        Ok(self.store.find_by_name_contains(fragment).await?)
    }

    #[instrument(skip(self), fields(item_id = %id), err)]
    pub async fn remove_one(&self, id: ItemId) -> Result<(), ServiceError> {
        self.require(id).await?;
        self.store.delete_by_id(id).await?;
        tracing::info!(item_id = %id, "item deleted");
        Ok(())
    }

    async fn require(&self, id: ItemId) -> Result<Item, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(not_found_message(id)).into())
    }

    /// Field rules first, then uniqueness against every item except `exclude`.
    async fn validate(
        &self,
        draft: &ItemDraft,
        exclude: Option<ItemId>,
    ) -> Result<ItemFields, ServiceError> {
        let fields = draft.validate().inspect_err(|e| {
            tracing::debug!(reason = %e, "item rejected");
        })?;

        if let Some(other) = self.store.find_by_name(&fields.name).await? {
            if other.is_other_than(exclude) {
                tracing::debug!(conflicting_id = %other.id, "item name already in use");
                return Err(DomainError::validation(NAME_IN_USE).into());
            }
        }

        if let Some(other) = self.store.find_by_serial_number(&fields.serial_number).await? {
            if other.is_other_than(exclude) {
                tracing::debug!(conflicting_id = %other.id, "item serial number already in use");
                return Err(DomainError::validation(SERIAL_IN_USE).into());
            }
        }

        Ok(fields)
    }
}
