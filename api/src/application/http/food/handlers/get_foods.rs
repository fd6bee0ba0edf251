use gutflix_core::domain::food::{FoodItem, catalog};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetFoodsResponse {
    pub data: Vec<FoodItem>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food",
    summary = "List foods",
    description = "The selectable food catalog.",
    responses(
        (status = 200, body = GetFoodsResponse)
    )
)]
pub async fn get_foods() -> Result<Response<GetFoodsResponse>, ApiError> {
    Ok(Response::OK(GetFoodsResponse {
        data: catalog::all().to_vec(),
    }))
}
