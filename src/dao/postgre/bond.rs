use sqlx::Error;

use crate::model::{Bond, Table};

impl Table<Bond> {
    pub async fn get_by_address(
        &self,
        address: &str,
    ) -> Result<Vec<Bond>, Error> {
        sqlx::query_as(
            r#"
            SELECT
                address,
                validator_id,
                raw_amount,
                start
            FROM bonds
            WHERE address = $1
            "#,
        )
        .bind(address)
        .persistent(true)
        .fetch_all(&self.pool)
        .await
    }
}
