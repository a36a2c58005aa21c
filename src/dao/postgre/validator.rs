use sqlx::Error;

use crate::model::{Table, Validator};

impl Table<Validator> {
    /// Batched directory lookup. Ids without a row are simply absent from
    /// the result; the caller decides what a miss means.
    pub async fn get_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<Validator>, Error> {
        sqlx::query_as(
            r#"
            SELECT
                id,
                namada_address
            FROM validators
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .persistent(true)
        .fetch_all(&self.pool)
        .await
    }
}
