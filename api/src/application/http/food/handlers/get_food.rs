use axum::extract::Path;
use gutflix_core::domain::food::{FoodItem, catalog};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{
    api_error::{ApiError, ErrorBody},
    response::Response,
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetFoodResponse {
    pub data: FoodItem,
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "food",
    summary = "Get food",
    params(
        ("id" = u32, Path, description = "Catalog id"),
    ),
    responses(
        (status = 200, body = GetFoodResponse),
        (status = 404, body = ErrorBody, description = "Food not found")
    )
)]
pub async fn get_food(Path(id): Path<u32>) -> Result<Response<GetFoodResponse>, ApiError> {
    let item = catalog::find_by_id(id)
        .ok_or_else(|| ApiError::NotFound(format!("Food {} not found", id)))?;

    Ok(Response::OK(GetFoodResponse { data: item.clone() }))
}
