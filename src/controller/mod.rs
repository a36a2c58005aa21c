pub mod blocks;
pub mod stake;
pub mod total_stake;
pub mod transaction;
pub mod transactions;
pub mod version;
