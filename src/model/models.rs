use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

// =============================================================================
// TRANSACTION DOMAIN
// =============================================================================

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct WrapperTransaction {
    pub id: String,
    pub fee_payer: String,
    pub fee_token: String,
    pub gas_limit: BigDecimal,
    pub block_height: i64,
    pub exit_code: String,
    pub atomic: bool,
    /// Joined from the blocks table on block height.
    pub timestamp: Option<DateTime<Utc>>,
    #[sqlx(skip)]
    pub inner_transactions: Vec<InnerTransaction>,
}

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct InnerTransaction {
    pub id: String,
    pub wrapper_id: String,
    pub kind: String,
    pub data: Option<Value>,
    pub memo: Option<String>,
    pub exit_code: String,
}

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct BlockInfo {
    pub height: i64,
    pub hash: String,
    pub timestamp: DateTime<Utc>,
    pub tx_count: i64,
}

// =============================================================================
// STAKE DOMAIN
// =============================================================================

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Bond {
    pub address: String,
    pub validator_id: i32,
    pub raw_amount: BigDecimal,
    pub start: i32,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Unbond {
    pub address: String,
    pub validator_id: i32,
    pub raw_amount: BigDecimal,
    pub withdraw_epoch: i32,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PosReward {
    pub owner: String,
    pub validator_id: i32,
    pub raw_amount: BigDecimal,
    pub epoch: i32,
    pub claimed: bool,
}

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Validator {
    pub id: i32,
    pub namada_address: String,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TotalStake {
    pub epoch: i32,
    pub stake: i64,
}
