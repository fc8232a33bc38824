//! PostgreSQL-backed option repository.

use super::{DatabasePool, OptionRepository, RepositoryError};
use crate::models::{OptionContract, OptionRequest, now_timestamp};
use async_trait::async_trait;
use tracing::debug;

/// Option repository over the `options` table.
#[derive(Clone)]
pub struct PgOptionRepository {
    db: DatabasePool,
}

impl PgOptionRepository {
    /// Creates a repository that runs its statements on `db`.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OptionRepository for PgOptionRepository {
    async fn find_all(&self) -> Result<Vec<OptionContract>, RepositoryError> {
        let rows = sqlx::query_as::<_, OptionContract>("SELECT * FROM options ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OptionContract>, RepositoryError> {
        let row = sqlx::query_as::<_, OptionContract>("SELECT * FROM options WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row)
    }

    async fn find_by_symbol(&self, symbol: &str) -> Result<Vec<OptionContract>, RepositoryError> {
        let rows = sqlx::query_as::<_, OptionContract>(
            "SELECT * FROM options WHERE symbol = $1 ORDER BY id",
        )
        .bind(symbol)
        .fetch_all(self.db.pool())
        .await?;
        Ok(rows)
    }

    async fn find_by_option_type(
        &self,
        option_type: &str,
    ) -> Result<Vec<OptionContract>, RepositoryError> {
        let rows = sqlx::query_as::<_, OptionContract>(
            "SELECT * FROM options WHERE option_type = $1 ORDER BY id",
        )
        .bind(option_type)
        .fetch_all(self.db.pool())
        .await?;
        Ok(rows)
    }

    async fn find_by_symbol_and_option_type(
        &self,
        symbol: &str,
        option_type: &str,
    ) -> Result<Vec<OptionContract>, RepositoryError> {
        let rows = sqlx::query_as::<_, OptionContract>(
            "SELECT * FROM options WHERE symbol = $1 AND option_type = $2 ORDER BY id",
        )
        .bind(symbol)
        .bind(option_type)
        .fetch_all(self.db.pool())
        .await?;
        Ok(rows)
    }

    async fn insert(&self, request: &OptionRequest) -> Result<OptionContract, RepositoryError> {
        let now = now_timestamp();

        let row = sqlx::query_as::<_, OptionContract>(
            r#"
            INSERT INTO options (
                symbol, option_type, strike_price, current_price, expiration_date,
                premium, delta, gamma, theta, vega, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
            RETURNING *
            "#,
        )
        .bind(&request.symbol)
        .bind(&request.option_type)
        .bind(request.strike_price)
        .bind(request.current_price)
        .bind(request.expiration_date)
        .bind(request.premium)
        .bind(request.delta)
        .bind(request.gamma)
        .bind(request.theta)
        .bind(request.vega)
        .bind(now)
        .fetch_one(self.db.pool())
        .await?;

        debug!(id = row.id, "Inserted option row");
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        request: &OptionRequest,
    ) -> Result<Option<OptionContract>, RepositoryError> {
        let now = now_timestamp();

        // Single statement: the row is matched and overwritten atomically.
        let row = sqlx::query_as::<_, OptionContract>(
            r#"
            UPDATE options
            SET symbol = $2,
                option_type = $3,
                strike_price = $4,
                current_price = $5,
                expiration_date = $6,
                premium = $7,
                delta = $8,
                gamma = $9,
                theta = $10,
                vega = $11,
                updated_at = GREATEST(created_at, $12)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.symbol)
        .bind(&request.option_type)
        .bind(request.strike_price)
        .bind(request.current_price)
        .bind(request.expiration_date)
        .bind(request.premium)
        .bind(request.delta)
        .bind(request.gamma)
        .bind(request.theta)
        .bind(request.vega)
        .bind(now)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM options WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(self.db.pool()).await?;
        Ok(())
    }
}
