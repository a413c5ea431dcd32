use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDoc {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountsDoc {
    pub account_number: i64,
    pub account_type: String,
    pub branch_address: String,
}

#[derive(Serialize, ToSchema)]
pub struct CustomerDetailsDoc {
    pub customer: Option<CustomerDoc>,
    pub account: Option<AccountsDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDoc {
    pub status_code: String,
    pub status_msg: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDoc {
    pub api_path: String,
    pub error_code: String,
    pub error_message: String,
    pub error_time: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::accounts::create,
        crate::routes::accounts::fetch,
        crate::routes::accounts::update,
        crate::routes::accounts::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            AccountsDoc,
            CustomerDetailsDoc,
            ResponseDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "accounts")
    )
)]
pub struct ApiDoc;
