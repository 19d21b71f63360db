//! Postgres-backed item store.
//!
//! ## Error Mapping
//!
//! | SQLx Error | PostgreSQL Error Code | StoreError |
//! |------------|----------------------|------------|
//! | Database (unique violation) | `23505` | `Conflict` |
//! | Database (other) | Any other | `Backend` |
//! | RowNotFound (update) | N/A | `Missing` |
//! | Other | N/A | `Backend` |
//!
//! Substring search uses `strpos`, so `%` and `_` in the fragment match
//! literally and the comparison is case-sensitive, like the in-memory store.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use barang_core::ItemId;
use barang_inventory::{Item, ItemFields};

use super::{ItemStore, StoreError, StoreResult};

/// Postgres-backed item store over the `items` table.
///
/// Uses the SQLx connection pool, which is cheap to clone and `Send + Sync`.
#[derive(Debug, Clone)]
pub struct PostgresItemStore {
    pool: PgPool,
}

impl PostgresItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

struct ItemRow {
    id: i64,
    name: String,
    quantity: i32,
    serial_number: String,
}

impl<'r> sqlx::FromRow<'r, PgRow> for ItemRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(ItemRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            quantity: row.try_get("quantity")?,
            serial_number: row.try_get("serial_number")?,
        })
    }
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId::new(row.id),
            name: row.name,
            quantity: row.quantity,
            serial_number: row.serial_number,
        }
    }
}

#[async_trait::async_trait]
impl ItemStore for PostgresItemStore {
    #[instrument(skip(self, values), err)]
    async fn save(&self, id: Option<ItemId>, values: ItemFields) -> StoreResult<Item> {
        let row = match id {
            None => sqlx::query_as::<_, ItemRow>(
                r#"
                INSERT INTO items (name, quantity, serial_number)
                VALUES ($1, $2, $3)
                RETURNING id, name, quantity, serial_number
                "#,
            )
            .bind(&values.name)
            .bind(values.quantity)
            .bind(&values.serial_number)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("insert_item", e))?,
            Some(id) => sqlx::query_as::<_, ItemRow>(
                r#"
                UPDATE items
                SET name = $1, quantity = $2, serial_number = $3
                WHERE id = $4
                RETURNING id, name, quantity, serial_number
                "#,
            )
            .bind(&values.name)
            .bind(values.quantity)
            .bind(&values.serial_number)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("update_item", e))?
            .ok_or(StoreError::Missing(id))?,
        };
        Ok(row.into())
    }

    #[instrument(skip(self), err)]
    async fn find_by_id(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, quantity, serial_number FROM items WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_id", e))?;
        Ok(row.map(Item::from))
    }

    #[instrument(skip(self), err)]
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, quantity, serial_number FROM items WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_name", e))?;
        Ok(row.map(Item::from))
    }

    #[instrument(skip(self), err)]
    async fn find_by_serial_number(&self, serial_number: &str) -> StoreResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, quantity, serial_number FROM items WHERE serial_number = $1",
        )
        .bind(serial_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_serial_number", e))?;
        Ok(row.map(Item::from))
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, quantity, serial_number FROM items ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_all", e))?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self), err)]
    async fn find_by_name_contains(&self, fragment: &str) -> StoreResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, quantity, serial_number
            FROM items
            WHERE strpos(name, $1) > 0
            ORDER BY id ASC
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_name_contains", e))?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self), err)]
    async fn delete_by_id(&self, id: ItemId) -> StoreResult<()> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_id", e))?;
        Ok(())
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("database error in {}: {}", operation, db_err.message());
            match db_err.code().as_deref() {
                Some("23505") => StoreError::Conflict(msg),
                _ => StoreError::Backend(msg),
            }
        }
        sqlx::Error::PoolClosed => {
            StoreError::Backend(format!("connection pool closed in {}", operation))
        }
        _ => StoreError::Backend(format!("sqlx error in {}: {}", operation, err)),
    }
}
