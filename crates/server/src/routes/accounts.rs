use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, OriginalUri, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use service::account::{CustomerDetailsDto, CustomerDto};

use crate::{errors::ApiError, routes::ServerState, validation};

pub const STATUS_201: &str = "201";
pub const MESSAGE_201: &str = "Account created successfully";
pub const STATUS_200: &str = "200";
pub const MESSAGE_200: &str = "Request processed successfully";
pub const STATUS_417: &str = "417";
pub const MESSAGE_417_UPDATE: &str = "Update operation failed. Please try again or contact Dev team";
pub const STATUS_500: &str = "500";
pub const MESSAGE_500: &str = "An error occurred. Please try again or contact Dev team";

/// Plain status acknowledgement.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto {
    pub status_code: String,
    pub status_msg: String,
}

impl ResponseDto {
    pub fn new(code: &str, msg: &str) -> Self {
        Self { status_code: code.to_string(), status_msg: msg.to_string() }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchQuery {
    #[serde(rename = "mobileNum")]
    pub mobile_num: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteQuery {
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
}

#[utoipa::path(
    post, path = "/api/create", tag = "accounts",
    request_body = crate::openapi::CustomerDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ResponseDoc),
        (status = 400, description = "Validation error or mobile number already registered", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ResponseDto>), ApiError> {
    let path = uri.path();
    let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text(), path))?;
    validation::customer(&input).map_err(|m| ApiError::bad_request(m, path))?;

    state.accounts.create_account(input).await.map_err(|e| ApiError::from_service(e, path))?;
    Ok((StatusCode::CREATED, Json(ResponseDto::new(STATUS_201, MESSAGE_201))))
}

#[utoipa::path(
    get, path = "/api/fetch", tag = "accounts",
    params(FetchQuery),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDetailsDoc),
        (status = 400, description = "Invalid mobile number", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Customer or account not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn fetch(
    State(state): State<ServerState>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<FetchQuery>, QueryRejection>,
) -> Result<Json<CustomerDetailsDto>, ApiError> {
    let path = uri.path();
    let Query(q) = query.map_err(|e| ApiError::bad_request(e.body_text(), path))?;
    validation::mobile_param("mobileNum", &q.mobile_num).map_err(|m| ApiError::bad_request(m, path))?;

    let view = state.accounts.fetch_account(&q.mobile_num).await.map_err(|e| ApiError::from_service(e, path))?;
    Ok(Json(view))
}

#[utoipa::path(
    put, path = "/api/update", tag = "accounts",
    request_body = crate::openapi::CustomerDetailsDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ResponseDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Account or customer not found", body = crate::openapi::ErrorDoc),
        (status = 417, description = "Nothing updated", body = crate::openapi::ResponseDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<CustomerDetailsDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ResponseDto>), ApiError> {
    let path = uri.path();
    let Json(view) = payload.map_err(|e| ApiError::bad_request(e.body_text(), path))?;
    validation::details(&view).map_err(|m| ApiError::bad_request(m, path))?;

    match state.accounts.update_account(view).await {
        Ok(true) => Ok((StatusCode::OK, Json(ResponseDto::new(STATUS_200, MESSAGE_200)))),
        Ok(false) => {
            info!("update request carried no account details");
            Ok((StatusCode::EXPECTATION_FAILED, Json(ResponseDto::new(STATUS_417, MESSAGE_417_UPDATE))))
        }
        Err(e) => Err(ApiError::from_service(e, path)),
    }
}

#[utoipa::path(
    delete, path = "/api/delete", tag = "accounts",
    params(DeleteQuery),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::ResponseDoc),
        (status = 400, description = "Invalid mobile number", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ResponseDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<ResponseDto>), ApiError> {
    let path = uri.path();
    let Query(q) = query.map_err(|e| ApiError::bad_request(e.body_text(), path))?;
    validation::mobile_param("mobileNumber", &q.mobile_number).map_err(|m| ApiError::bad_request(m, path))?;

    match state.accounts.delete_account(&q.mobile_number).await {
        Ok(true) => Ok((StatusCode::OK, Json(ResponseDto::new(STATUS_200, MESSAGE_200)))),
        Ok(false) => {
            error!(mobile_number = %q.mobile_number, "delete reported no success");
            Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(ResponseDto::new(STATUS_500, MESSAGE_500))))
        }
        Err(e) => Err(ApiError::from_service(e, path)),
    }
}
