use sqlx::Error;

use crate::model::{Table, Unbond};

impl Table<Unbond> {
    /// All unbonds for an address. Classification against the query epoch
    /// happens in the aggregation layer.
    pub async fn get_by_address(
        &self,
        address: &str,
    ) -> Result<Vec<Unbond>, Error> {
        sqlx::query_as(
            r#"
            SELECT
                address,
                validator_id,
                raw_amount,
                withdraw_epoch
            FROM unbonds
            WHERE address = $1
            "#,
        )
        .bind(address)
        .persistent(true)
        .fetch_all(&self.pool)
        .await
    }
}
