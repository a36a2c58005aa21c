pub mod stake;
pub mod total_stake;
pub mod transactions;
