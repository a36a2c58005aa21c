use sqlx::Error;

use crate::model::{BlockInfo, Table};

impl Table<BlockInfo> {
    /// One page of blocks, newest first, with the number of wrapper
    /// transactions landed in each block.
    pub async fn get_page(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlockInfo>, Error> {
        sqlx::query_as(
            r#"
            SELECT
                b.height,
                b.hash,
                b.timestamp,
                COUNT(wt.id) AS tx_count
            FROM blocks b
            LEFT JOIN wrapper_transactions wt
                ON wt.block_height = b.height
            GROUP BY b.height, b.hash, b.timestamp
            ORDER BY b.height DESC
            LIMIT $1
            OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .persistent(true)
        .fetch_all(&self.pool)
        .await
    }
}
