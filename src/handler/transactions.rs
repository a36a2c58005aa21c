use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::{InnerTransaction, WrapperTransaction},
    types::Paginated,
};

/// Inner transactions of this kind carry large IBC payloads that never
/// leave the service; their data is blanked before any response is built.
const REDACTED_KIND: &str = "ibc_msg_transfer";

pub async fn get_transactions(
    state: &AppState<State>,
    address: Option<&str>,
    limit: i64,
    page: i64,
) -> Result<Paginated<WrapperTransaction>, Error> {
    let offset = (page - 1) * limit;

    let total = state.database.wrapper_transaction.count(address).await?;
    let mut rows = state
        .database
        .wrapper_transaction
        .get_page(address, limit, offset)
        .await?;

    let ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();
    let inner = state
        .database
        .inner_transaction
        .get_by_wrapper_ids(&ids)
        .await?;

    attach_inner(&mut rows, inner);

    Ok(Paginated::new(page, limit, total, rows))
}

pub async fn get_transaction(
    state: &AppState<State>,
    hash: &str,
) -> Result<WrapperTransaction, Error> {
    let mut row = state
        .database
        .wrapper_transaction
        .get_one(hash)
        .await?
        .ok_or_else(|| Error::NotFound(format!("transaction {}", hash)))?;

    let inner = state
        .database
        .inner_transaction
        .get_by_wrapper_ids(std::slice::from_ref(&row.id))
        .await?;

    attach_inner(std::slice::from_mut(&mut row), inner);

    Ok(row)
}

/// Groups inner transactions under their parent wrapper and applies the
/// payload redaction rule. Wrappers without inner transactions end up with
/// an empty sequence.
pub fn attach_inner(
    rows: &mut [WrapperTransaction],
    inner: Vec<InnerTransaction>,
) {
    let mut grouped: HashMap<String, Vec<InnerTransaction>> = HashMap::new();

    for mut tx in inner {
        redact(&mut tx);
        grouped.entry(tx.wrapper_id.clone()).or_default().push(tx);
    }

    for row in rows {
        row.inner_transactions =
            grouped.remove(&row.id).unwrap_or_default();
    }
}

pub fn redact(tx: &mut InnerTransaction) {
    if tx.kind == REDACTED_KIND {
        tx.data = Some(Value::Object(Map::new()));
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use serde_json::json;

    use crate::model::{InnerTransaction, WrapperTransaction};

    use super::{attach_inner, redact};

    fn wrapper(id: &str) -> WrapperTransaction {
        WrapperTransaction {
            id: id.to_owned(),
            fee_payer: String::from("tnam1fee"),
            fee_token: String::from("tnam1nam"),
            gas_limit: BigDecimal::from(50000),
            block_height: 128,
            exit_code: String::from("applied"),
            atomic: false,
            timestamp: None,
            inner_transactions: vec![],
        }
    }

    fn inner(id: &str, wrapper_id: &str, kind: &str) -> InnerTransaction {
        InnerTransaction {
            id: id.to_owned(),
            wrapper_id: wrapper_id.to_owned(),
            kind: kind.to_owned(),
            data: Some(json!({"amount": "100", "target": "tnam1xyz"})),
            memo: None,
            exit_code: String::from("applied"),
        }
    }

    #[test]
    fn redacts_ibc_transfer_payloads() {
        let mut tx = inner("a", "w1", "ibc_msg_transfer");
        redact(&mut tx);
        assert_eq!(tx.data, Some(json!({})));
    }

    #[test]
    fn keeps_other_payloads() {
        let mut tx = inner("a", "w1", "transparent_transfer");
        let original = tx.data.clone();
        redact(&mut tx);
        assert_eq!(tx.data, original);
    }

    #[test]
    fn groups_inner_under_parent_wrapper() {
        let mut rows = vec![wrapper("w1"), wrapper("w2"), wrapper("w3")];
        let inner_rows = vec![
            inner("a", "w1", "transparent_transfer"),
            inner("b", "w2", "bond"),
            inner("c", "w1", "ibc_msg_transfer"),
        ];

        attach_inner(&mut rows, inner_rows);

        assert_eq!(rows[0].inner_transactions.len(), 2);
        assert_eq!(rows[1].inner_transactions.len(), 1);
        // no match means an empty sequence, never an absent field
        assert!(rows[2].inner_transactions.is_empty());
    }

    #[test]
    fn redaction_applies_before_grouping() {
        let mut rows = vec![wrapper("w1")];
        attach_inner(&mut rows, vec![inner("a", "w1", "ibc_msg_transfer")]);

        assert_eq!(rows[0].inner_transactions[0].data, Some(json!({})));
    }
}
