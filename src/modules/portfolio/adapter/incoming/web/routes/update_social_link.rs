use actix_web::{patch, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::edit_response::edit_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioOutput;
use crate::modules::portfolio::domain::entities::SocialPlatform;
use crate::modules::portfolio::domain::mutations::PortfolioEdit;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSocialLinkRequest {
    #[schema(example = "github")]
    pub platform: SocialPlatform,
    #[schema(example = "https://github.com/ada")]
    pub url: String,
}

/// Update one social link
#[utoipa::path(
    patch,
    path = "/api/portfolio/social-links",
    tag = "portfolio",
    request_body = UpdateSocialLinkRequest,
    responses(
        (status = 200, description = "Link updated", body = inline(SuccessResponse<EditPortfolioOutput>)),
        (status = 400, description = "Unknown platform or malformed body", body = ErrorResponse),
        (status = 409, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[patch("/api/portfolio/social-links")]
pub async fn update_social_link_handler(
    data: web::Data<AppState>,
    payload: web::Json<UpdateSocialLinkRequest>,
) -> impl Responder {
    let UpdateSocialLinkRequest { platform, url } = payload.into_inner();
    let result = data
        .portfolio
        .edit
        .execute(PortfolioEdit::SetSocialLink { platform, url })
        .await;
    edit_response(result)
}
