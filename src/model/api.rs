use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response: `{ "msg": "..." }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub msg: String,
}

/// Body of `GET /api`: the OpenAPI document describing every endpoint.
#[derive(Serialize)]
pub struct EndpointsDto {
    pub endpoints: utoipa::openapi::OpenApi,
}
