use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{parse_paging, DEFAULT_LIMIT, DEFAULT_PAGE},
};

#[get("/blocks")]
async fn index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let limit = parse_paging(data.limit.as_deref(), DEFAULT_LIMIT);
    let page = parse_paging(data.page.as_deref(), DEFAULT_PAGE);
    let offset = (page - 1) * limit;

    let blocks = state.database.block.get_page(limit, offset).await?;

    Ok(web::Json(blocks))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    limit: Option<String>,
    page: Option<String>,
}
