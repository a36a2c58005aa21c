use sqlx::{Error, QueryBuilder};

use crate::model::{Table, TotalStake};

use super::DataBase;

impl Table<TotalStake> {
    pub async fn get_by_epochs(
        &self,
        epochs: &[i32],
    ) -> Result<Vec<TotalStake>, Error> {
        sqlx::query_as(
            r#"
            SELECT
                epoch,
                stake
            FROM total_stake
            WHERE epoch = ANY($1)
            "#,
        )
        .bind(epochs)
        .persistent(true)
        .fetch_all(&self.pool)
        .await
    }

    /// Batched upsert keyed by epoch. Re-polling an epoch overwrites its
    /// stake value instead of appending a row.
    pub async fn insert_or_update(
        &self,
        data: &Vec<TotalStake>,
    ) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }

        let mut query_builder: QueryBuilder<DataBase> = QueryBuilder::new(
            r#"
            INSERT INTO total_stake (
                epoch,
                stake
            )"#,
        );

        query_builder.push_values(data, |mut b, row| {
            b.push_bind(row.epoch).push_bind(row.stake);
        });
        query_builder
            .push(" ON CONFLICT (epoch) DO UPDATE SET stake = EXCLUDED.stake");

        let query = query_builder.build();
        query.execute(&self.pool).await?;

        Ok(())
    }
}
