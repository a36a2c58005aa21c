use std::collections::HashMap;

use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
};

#[get("/total-stake")]
async fn index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let raw = data.epochs.as_deref().ok_or_else(|| {
        Error::Validation(String::from(
            "Missing or invalid 'epochs' query parameter",
        ))
    })?;

    let epochs = parse_epochs(raw);

    if epochs.is_empty() {
        return Err(Error::Validation(String::from(
            "No valid epochs provided",
        )));
    }

    let rows = state.database.total_stake.get_by_epochs(&epochs).await?;

    let series: HashMap<i32, i64> = rows
        .into_iter()
        .map(|row| (row.epoch, row.stake))
        .collect();

    Ok(web::Json(series))
}

/// Entries that do not parse as integers are skipped, not rejected.
fn parse_epochs(raw: &str) -> Vec<i32> {
    raw.split(',')
        .filter_map(|epoch| epoch.trim().parse::<i32>().ok())
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct Query {
    epochs: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::parse_epochs;

    #[test]
    fn skips_invalid_entries() {
        assert_eq!(parse_epochs("5,abc,7"), vec![5, 7]);
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_epochs(" 1 , 2 "), vec![1, 2]);
    }

    #[test]
    fn all_invalid_yields_empty() {
        assert!(parse_epochs("x,y,").is_empty());
        assert!(parse_epochs("").is_empty());
    }
}
