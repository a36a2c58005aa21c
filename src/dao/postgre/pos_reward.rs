use sqlx::Error;

use crate::model::{PosReward, Table};

impl Table<PosReward> {
    /// Unclaimed rewards for an owner at exactly the given epoch. Claimed
    /// rows are excluded at the store, not zeroed later.
    pub async fn get_unclaimed(
        &self,
        owner: &str,
        epoch: i32,
    ) -> Result<Vec<PosReward>, Error> {
        sqlx::query_as(
            r#"
            SELECT
                owner,
                validator_id,
                raw_amount,
                epoch,
                claimed
            FROM pos_rewards
            WHERE owner = $1 AND epoch = $2 AND claimed = FALSE
            "#,
        )
        .bind(owner)
        .bind(epoch)
        .persistent(true)
        .fetch_all(&self.pool)
        .await
    }
}
