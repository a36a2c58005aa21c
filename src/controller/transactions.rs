use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    handler::transactions::get_transactions,
    helpers::{parse_paging, DEFAULT_LIMIT, DEFAULT_PAGE},
};

#[get("/transactions")]
async fn index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let limit = parse_paging(data.limit.as_deref(), DEFAULT_LIMIT);
    let page = parse_paging(data.page.as_deref(), DEFAULT_PAGE);

    let result = get_transactions(&state, None, limit, page).await?;

    Ok(web::Json(result))
}

#[get("/transactions/{address}")]
async fn by_address(
    state: web::Data<AppState<State>>,
    path: web::Path<String>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let address = path.into_inner();
    let limit = parse_paging(data.limit.as_deref(), DEFAULT_LIMIT);
    let page = parse_paging(data.page.as_deref(), DEFAULT_PAGE);

    let result =
        get_transactions(&state, Some(address.as_str()), limit, page).await?;

    Ok(web::Json(result))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    limit: Option<String>,
    page: Option<String>,
}
