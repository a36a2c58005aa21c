use actix_web::{get, web, Responder};

use crate::{
    configuration::{AppState, State},
    error::Error,
    handler::transactions::get_transaction,
};

#[get("/transaction/{hash}")]
async fn index(
    state: web::Data<AppState<State>>,
    path: web::Path<String>,
) -> Result<impl Responder, Error> {
    let hash = path.into_inner();
    let data = get_transaction(&state, &hash).await?;

    Ok(web::Json(data))
}
