use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AbciQueryBody {
    pub jsonrpc: String,
    pub id: i64,
    pub result: AbciQueryResult,
}

#[derive(Debug, Deserialize)]
pub struct AbciQueryResult {
    pub response: AbciQueryResponse,
}

#[derive(Debug, Deserialize)]
pub struct AbciQueryResponse {
    #[serde(default)]
    pub code: u32,
    pub value: Option<String>,
    pub log: Option<String>,
}
