use sqlx::Error;

use crate::model::{InnerTransaction, Table};

impl Table<InnerTransaction> {
    /// All inner transactions belonging to any of the given wrappers, in one
    /// round trip.
    pub async fn get_by_wrapper_ids(
        &self,
        wrapper_ids: &[String],
    ) -> Result<Vec<InnerTransaction>, Error> {
        sqlx::query_as(
            r#"
            SELECT
                id,
                wrapper_id,
                kind,
                data,
                memo,
                exit_code
            FROM inner_transactions
            WHERE wrapper_id = ANY($1)
            "#,
        )
        .bind(wrapper_ids)
        .persistent(true)
        .fetch_all(&self.pool)
        .await
    }
}
