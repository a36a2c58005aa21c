use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    handler::stake::get_stake,
};

#[get("/stake/{address}")]
async fn index(
    state: web::Data<AppState<State>>,
    path: web::Path<String>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let address = path.into_inner();
    let epoch = data
        .epoch
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .ok_or_else(|| {
            Error::Validation(String::from(
                "Missing or invalid 'epoch' query parameter",
            ))
        })?;

    let summary = get_stake(&state, &address, epoch).await?;

    Ok(web::Json(summary))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    epoch: Option<String>,
}
