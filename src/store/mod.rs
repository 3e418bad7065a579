use crate::config::DatabaseConfig;
use crate::models::{Drink, IngredientEntry};
use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use thiserror::Error;

/// Failure modes of the backing store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("drink not found")]
    NotFound,
    #[error("a drink with this title already exists")]
    DuplicateTitle,
    #[error("stored recipe is not valid JSON: {0}")]
    CorruptRecipe(#[from] serde_json::Error),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Owns persistence of drink records. Every mutation runs inside an
/// explicit transaction; a transaction dropped on an error path rolls
/// back before the connection is released.
#[derive(Clone)]
pub struct DrinkStore {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct DrinkRow {
    id: i64,
    title: String,
    recipe: String,
}

impl DrinkRow {
    fn into_drink(self) -> Result<Drink, StoreError> {
        Ok(Drink {
            id: self.id,
            title: self.title,
            recipe: serde_json::from_str(&self.recipe)?,
        })
    }
}

impl DrinkStore {
    /// Opens a pool against the configured connection string
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.connections)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Creates the drinks table when absent. Non-destructive; restarts
    /// keep existing data.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS drinks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL UNIQUE,
                recipe TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// All drinks, ordered by title
    pub async fn list_drinks(&self) -> Result<Vec<Drink>, StoreError> {
        let rows: Vec<DrinkRow> =
            sqlx::query_as("SELECT id, title, recipe FROM drinks ORDER BY title")
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(DrinkRow::into_drink).collect()
    }

    pub async fn create_drink(
        &self,
        title: &str,
        recipe: &[IngredientEntry],
    ) -> Result<Drink, StoreError> {
        let encoded = serde_json::to_string(recipe)?;
        let mut tx = self.pool.begin().await?;
        let row: DrinkRow = sqlx::query_as(
            "INSERT INTO drinks (title, recipe) VALUES (?1, ?2) RETURNING id, title, recipe",
        )
        .bind(title)
        .bind(&encoded)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;
        tx.commit().await?;
        debug!("Created drink {} ({})", row.id, row.title);
        row.into_drink()
    }

    /// Partial update: a present field replaces the stored value, an
    /// absent field leaves it untouched.
    pub async fn update_drink(
        &self,
        id: i64,
        title: Option<&str>,
        recipe: Option<&[IngredientEntry]>,
    ) -> Result<Drink, StoreError> {
        let mut tx = self.pool.begin().await?;
        let existing: DrinkRow =
            sqlx::query_as("SELECT id, title, recipe FROM drinks WHERE id = ?1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(StoreError::NotFound)?;

        let title = title.unwrap_or(&existing.title);
        let encoded = match recipe {
            Some(entries) => serde_json::to_string(entries)?,
            None => existing.recipe.clone(),
        };

        let row: DrinkRow = sqlx::query_as(
            "UPDATE drinks SET title = ?1, recipe = ?2 WHERE id = ?3 RETURNING id, title, recipe",
        )
        .bind(title)
        .bind(&encoded)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;
        tx.commit().await?;
        debug!("Updated drink {}", id);
        row.into_drink()
    }

    pub async fn delete_drink(&self, id: i64) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM drinks WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        tx.commit().await?;
        debug!("Deleted drink {}", id);
        Ok(())
    }
}

fn map_write_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return StoreError::DuplicateTitle;
        }
    }
    StoreError::Database(e)
}
