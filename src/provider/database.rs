use crate::{
    configuration::Config,
    dao::{PoolOption, PoolType},
    error::Error,
    model::{
        BlockInfo, Bond, InnerTransaction, PosReward, Table, TotalStake,
        Unbond, Validator, WrapperTransaction,
    },
};

#[derive(Debug)]
pub struct DatabasePool {
    pub wrapper_transaction: Table<WrapperTransaction>,
    pub inner_transaction: Table<InnerTransaction>,
    pub block: Table<BlockInfo>,
    pub bond: Table<Bond>,
    pub unbond: Table<Unbond>,
    pub pos_reward: Table<PosReward>,
    pub validator: Table<Validator>,
    pub total_stake: Table<TotalStake>,
    pub pool: PoolType,
}

impl DatabasePool {
    pub async fn new(config: &Config) -> Result<DatabasePool, Error> {
        let pool = PoolOption::new()
            .max_connections(20)
            .connect(config.database_url.as_str())
            .await?;

        Ok(DatabasePool {
            pool: pool.clone(),
            wrapper_transaction: Table::new(pool.clone()),
            inner_transaction: Table::new(pool.clone()),
            block: Table::new(pool.clone()),
            bond: Table::new(pool.clone()),
            unbond: Table::new(pool.clone()),
            pos_reward: Table::new(pool.clone()),
            validator: Table::new(pool.clone()),
            total_stake: Table::new(pool),
        })
    }

    pub fn get_pool(&self) -> &PoolType {
        &self.pool
    }
}
