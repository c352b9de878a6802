use actix_web::{patch, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::edit_response::edit_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioOutput;
use crate::modules::portfolio::domain::entities::PersonalField;
use crate::modules::portfolio::domain::mutations::PortfolioEdit;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePersonalInfoRequest {
    #[schema(example = "title")]
    pub field: PersonalField,
    /// Stored verbatim; an empty string hides the field when viewing.
    #[schema(example = "Staff Engineer")]
    pub value: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Update one personal info field
#[utoipa::path(
    patch,
    path = "/api/portfolio/personal-info",
    tag = "portfolio",
    request_body = UpdatePersonalInfoRequest,
    responses(
        (status = 200, description = "Field updated", body = inline(SuccessResponse<EditPortfolioOutput>)),
        (status = 400, description = "Unknown field or malformed body", body = ErrorResponse),
        (status = 409, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[patch("/api/portfolio/personal-info")]
pub async fn update_personal_info_handler(
    data: web::Data<AppState>,
    payload: web::Json<UpdatePersonalInfoRequest>,
) -> impl Responder {
    let UpdatePersonalInfoRequest { field, value } = payload.into_inner();
    let result = data
        .portfolio
        .edit
        .execute(PortfolioEdit::SetPersonalField { field, value })
        .await;
    edit_response(result)
}
