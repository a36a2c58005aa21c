use sqlx::Error;

use crate::model::{Table, WrapperTransaction};

impl Table<WrapperTransaction> {
    /// Count of wrapper transactions, optionally scoped to a fee payer.
    /// "No filter" is expressed as a tautological predicate so both variants
    /// share one query text.
    pub async fn count(&self, fee_payer: Option<&str>) -> Result<i64, Error> {
        let (count,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM wrapper_transactions
            WHERE ($1::TEXT IS NULL OR fee_payer = $1)
            "#,
        )
        .bind(fee_payer)
        .persistent(true)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// One page of wrapper transactions, newest block first, with the block
    /// timestamp joined in.
    pub async fn get_page(
        &self,
        fee_payer: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<WrapperTransaction>, Error> {
        sqlx::query_as(
            r#"
            SELECT
                wt.id,
                wt.fee_payer,
                wt.fee_token,
                wt.gas_limit,
                wt.block_height,
                wt.exit_code,
                wt.atomic,
                b.timestamp
            FROM wrapper_transactions wt
            LEFT JOIN blocks b
                ON wt.block_height = b.height
            WHERE ($3::TEXT IS NULL OR wt.fee_payer = $3)
            ORDER BY wt.block_height DESC
            LIMIT $1
            OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .bind(fee_payer)
        .persistent(true)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_one(
        &self,
        hash: &str,
    ) -> Result<Option<WrapperTransaction>, Error> {
        sqlx::query_as(
            r#"
            SELECT
                wt.id,
                wt.fee_payer,
                wt.fee_token,
                wt.gas_limit,
                wt.block_height,
                wt.exit_code,
                wt.atomic,
                b.timestamp
            FROM wrapper_transactions wt
            LEFT JOIN blocks b
                ON wt.block_height = b.height
            WHERE wt.id = $1
            "#,
        )
        .bind(hash)
        .persistent(true)
        .fetch_optional(&self.pool)
        .await
    }
}
