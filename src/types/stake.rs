use bigdecimal::BigDecimal;
use serde::Serialize;

/// Balance sheet of one validator for the queried address.
#[derive(Debug, Serialize)]
pub struct StakePositionEntry {
    #[serde(rename = "validatorAddress")]
    pub validator_address: Option<String>,
    pub bonds: BigDecimal,
    pub unbonds: BigDecimal,
    pub withdrawable: BigDecimal,
    pub rewards: BigDecimal,
}

#[derive(Debug, Serialize, Default)]
pub struct StakeTotal {
    pub bonds: BigDecimal,
    pub unbonds: BigDecimal,
    pub withdrawable: BigDecimal,
    pub rewards: BigDecimal,
    pub total: BigDecimal,
}

#[derive(Debug, Serialize)]
pub struct StakeSummary {
    pub positions: Vec<StakePositionEntry>,
    pub total: StakeTotal,
}
